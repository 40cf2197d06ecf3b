//! Backend HTTP provider.
//!
//! POSTs one request per zone to the monitoring backend, one endpoint per
//! metric kind (`/aqi`, `/flood`, `/heatwave`). Responses go through the
//! validating parse layer, so a malformed body surfaces as a decode error
//! for that zone only.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::api::{AqiReading, FloodReading, HeatwaveReading, MetricKind, ZoneQuery};
use crate::models::reading;
use crate::models::zones::Zone;
use crate::provider::error::{ErrorContext, ProviderError, ProviderResult};
use crate::provider::metrics::MetricProvider;

/// Provider fetching readings from the monitoring backend over HTTP.
pub struct BackendProvider {
    client: reqwest::Client,
    base_url: String,
}

impl BackendProvider {
    /// Create a provider for the given base URL with a per-request timeout.
    pub fn new(base_url: &str, timeout_secs: u64) -> ProviderResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| {
                ProviderError::configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST the zone query and return the raw response body.
    async fn fetch_body(&self, zone: &Zone, kind: MetricKind) -> ProviderResult<String> {
        let url = format!("{}/{}", self.base_url, kind.as_str());
        let operation = format!("fetch_{}", kind.as_str());
        let query = ZoneQuery::from_zone(zone, kind);

        debug!(zone = %zone.name, %url, "requesting {} reading", kind);

        let response = self
            .client
            .post(&url)
            .json(&query)
            .send()
            .await
            .map_err(|e| {
                ProviderError::from(e)
                    .with_operation(operation.clone())
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::status_with_context(
                format!("backend returned {}", status),
                ErrorContext::new(operation)
                    .with_zone(&zone.name)
                    .with_details(url),
            ));
        }

        response
            .text()
            .await
            .map_err(|e| ProviderError::from(e).with_operation(operation))
    }

    fn decode_error(zone: &Zone, kind: MetricKind, err: anyhow::Error) -> ProviderError {
        ProviderError::decode_with_context(
            format!("{:#}", err),
            ErrorContext::new(format!("fetch_{}", kind.as_str())).with_zone(&zone.name),
        )
    }
}

#[async_trait]
impl MetricProvider for BackendProvider {
    fn name(&self) -> &'static str {
        "backend"
    }

    async fn fetch_aqi(&self, zone: &Zone) -> ProviderResult<AqiReading> {
        let body = self.fetch_body(zone, MetricKind::Aqi).await?;
        reading::parse_aqi_reading(&body).map_err(|e| Self::decode_error(zone, MetricKind::Aqi, e))
    }

    async fn fetch_flood(&self, zone: &Zone) -> ProviderResult<FloodReading> {
        let body = self.fetch_body(zone, MetricKind::Flood).await?;
        reading::parse_flood_reading(&body)
            .map_err(|e| Self::decode_error(zone, MetricKind::Flood, e))
    }

    async fn fetch_heatwave(&self, zone: &Zone) -> ProviderResult<HeatwaveReading> {
        let body = self.fetch_body(zone, MetricKind::Heatwave).await?;
        reading::parse_heatwave_reading(&body)
            .map_err(|e| Self::decode_error(zone, MetricKind::Heatwave, e))
    }
}
