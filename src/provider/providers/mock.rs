//! Mock provider.
//!
//! Wraps the generators in [`services::mock`](crate::services::mock) behind
//! the provider trait. Fetches are synchronous under the hood and never fail.

use async_trait::async_trait;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::api::{AqiReading, FloodReading, HeatwaveReading};
use crate::models::zones::Zone;
use crate::provider::error::ProviderResult;
use crate::provider::metrics::MetricProvider;
use crate::services::mock;

/// Provider producing randomized plausible readings.
pub struct MockProvider {
    rng: Mutex<StdRng>,
}

impl MockProvider {
    /// Create a mock provider with an entropy-seeded RNG.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Create a mock provider with a fixed seed for reproducible sequences.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MetricProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn fetch_aqi(&self, zone: &Zone) -> ProviderResult<AqiReading> {
        Ok(mock::mock_aqi_reading(&mut *self.rng.lock(), zone))
    }

    async fn fetch_flood(&self, zone: &Zone) -> ProviderResult<FloodReading> {
        Ok(mock::mock_flood_reading(&mut *self.rng.lock(), zone))
    }

    async fn fetch_heatwave(&self, zone: &Zone) -> ProviderResult<HeatwaveReading> {
        Ok(mock::mock_heatwave_reading(&mut *self.rng.lock(), zone))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MetricKind;
    use crate::models::zones::hyderabad_zones;

    #[tokio::test]
    async fn test_mock_provider_never_fails() {
        let provider = MockProvider::with_seed(1);
        for zone in hyderabad_zones() {
            for kind in MetricKind::ALL {
                let reading = provider.fetch_reading(&zone, kind).await.unwrap();
                assert_eq!(reading.zone_id(), &zone.id);
                assert_eq!(reading.kind(), kind);
            }
        }
    }

    #[tokio::test]
    async fn test_seeded_providers_agree() {
        let a = MockProvider::with_seed(99);
        let b = MockProvider::with_seed(99);
        let zone = hyderabad_zones().remove(2);

        let left = a.fetch_aqi(&zone).await.unwrap();
        let right = b.fetch_aqi(&zone).await.unwrap();
        assert_eq!(left.aqi, right.aqi);
        assert_eq!(left.pm25, right.pm25);
        assert_eq!(left.noise, right.noise);
    }
}
