pub mod cities;
pub mod reading;
pub mod zones;

pub use cities::*;
pub use zones::*;
