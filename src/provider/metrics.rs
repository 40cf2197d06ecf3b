//! Metric provider trait.
//!
//! A provider is any source of zone readings: the backend HTTP client or the
//! mock generator. The controller only ever sees `Arc<dyn MetricProvider>`,
//! so swapping sources is a configuration choice, not a code path.

use async_trait::async_trait;

use super::error::ProviderResult;
use crate::api::{AqiReading, FloodReading, HeatwaveReading, MetricKind, ZoneReading};
use crate::models::zones::Zone;

/// Source of per-zone metric readings.
///
/// One fetch operation per metric kind, so adding a fourth kind extends this
/// trait rather than adding conditional branches to every caller.
///
/// # Thread Safety
/// Implementations must be `Send + Sync`; the controller calls them from
/// spawned tasks.
#[async_trait]
pub trait MetricProvider: Send + Sync {
    /// Short name for logs ("backend", "mock").
    fn name(&self) -> &'static str;

    /// Fetch an air-quality reading for one zone.
    async fn fetch_aqi(&self, zone: &Zone) -> ProviderResult<AqiReading>;

    /// Fetch a flood-risk reading for one zone.
    async fn fetch_flood(&self, zone: &Zone) -> ProviderResult<FloodReading>;

    /// Fetch a heatwave reading for one zone.
    async fn fetch_heatwave(&self, zone: &Zone) -> ProviderResult<HeatwaveReading>;

    /// Fetch a reading of the given kind, wrapped for uniform dispatch.
    async fn fetch_reading(&self, zone: &Zone, kind: MetricKind) -> ProviderResult<ZoneReading> {
        match kind {
            MetricKind::Aqi => self.fetch_aqi(zone).await.map(ZoneReading::Aqi),
            MetricKind::Flood => self.fetch_flood(zone).await.map(ZoneReading::Flood),
            MetricKind::Heatwave => self.fetch_heatwave(zone).await.map(ZoneReading::Heatwave),
        }
    }
}
