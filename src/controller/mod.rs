//! Zone-data refresh orchestration.
//!
//! The controller owns the published per-zone result mappings. A refresh
//! fetches every zone concurrently through the configured provider, tolerates
//! per-zone failures, and installs the cycle's results wholesale: readers
//! always see either the previous complete mapping or the new one, never a
//! half-updated state.

pub mod cycle;

pub use cycle::{CycleStatus, CycleTracker, LogEntry, LogLevel, RefreshCycle};

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::join_all;
use parking_lot::RwLock;
use tracing::{info, warn};

use crate::api::{AqiReading, FloodReading, HeatwaveReading, MetricKind, ZoneId, ZoneReading};
use crate::models::zones::{hyderabad_zones, Zone};
use crate::provider::MetricProvider;

/// Outcome summary of one refresh cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshReport {
    pub cycle_id: String,
    pub kind: MetricKind,
    /// Zones a fetch was issued for
    pub requested: usize,
    /// Zones present in the installed mapping
    pub fetched: usize,
    /// Zones omitted from the mapping this cycle
    pub failed: usize,
}

#[derive(Default)]
struct ControllerState {
    loading: bool,
    last_error: Option<String>,
    aqi: HashMap<ZoneId, AqiReading>,
    flood: HashMap<ZoneId, FloodReading>,
    heatwave: HashMap<ZoneId, HeatwaveReading>,
}

/// Orchestrates per-zone fetches and publishes the aggregate results.
///
/// Cheaply cloneable: clones share the same provider, zone list, state, and
/// cycle tracker, so refreshes can be triggered from spawned tasks.
///
/// A refresh already in flight is not cancelled by a new trigger; callers
/// consult [`is_loading`](Self::is_loading) to avoid overlapping cycles.
#[derive(Clone)]
pub struct ZoneDataController {
    provider: Arc<dyn MetricProvider>,
    zones: Arc<Vec<Zone>>,
    state: Arc<RwLock<ControllerState>>,
    tracker: CycleTracker,
}

impl ZoneDataController {
    /// Create a controller over the Hyderabad zone registry.
    pub fn new(provider: Arc<dyn MetricProvider>) -> Self {
        Self::with_zones(provider, hyderabad_zones())
    }

    /// Create a controller over an explicit zone list.
    pub fn with_zones(provider: Arc<dyn MetricProvider>, zones: Vec<Zone>) -> Self {
        Self {
            provider,
            zones: Arc::new(zones),
            state: Arc::new(RwLock::new(ControllerState::default())),
            tracker: CycleTracker::new(),
        }
    }

    /// The zones this controller fetches for.
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Whether a refresh cycle is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }

    /// The error message from the last cycle, if it failed as a whole.
    pub fn last_error(&self) -> Option<String> {
        self.state.read().last_error.clone()
    }

    /// The recorded refresh cycles.
    pub fn tracker(&self) -> &CycleTracker {
        &self.tracker
    }

    /// Refresh one metric kind across all zones.
    ///
    /// Fetches run concurrently, one spawned task per zone. A zone whose
    /// fetch fails is logged and omitted from the installed mapping; the
    /// siblings proceed. If a task itself dies the whole batch is abandoned
    /// and the previous mapping is retained.
    pub async fn refresh(&self, kind: MetricKind) -> RefreshReport {
        let cycle_id = self.tracker.start_cycle(kind);
        let requested = self.zones.len();
        {
            let mut state = self.state.write();
            state.loading = true;
            state.last_error = None;
        }
        info!(
            provider = self.provider.name(),
            %kind,
            zones = requested,
            "starting refresh cycle"
        );

        let handles: Vec<_> = self
            .zones
            .iter()
            .cloned()
            .map(|zone| {
                let provider = Arc::clone(&self.provider);
                tokio::spawn(async move {
                    let result = provider.fetch_reading(&zone, kind).await;
                    (zone, result)
                })
            })
            .collect();

        let mut readings: Vec<ZoneReading> = Vec::with_capacity(requested);
        let mut failed = 0usize;
        let mut batch_failed = false;

        for joined in join_all(handles).await {
            match joined {
                Ok((_, Ok(reading))) => readings.push(reading),
                Ok((zone, Err(err))) => {
                    warn!(zone = %zone.name, error = %err, "zone fetch failed");
                    self.tracker.log(
                        &cycle_id,
                        LogLevel::Warning,
                        format!("{}: {}", zone.name, err),
                    );
                    failed += 1;
                }
                Err(join_err) => {
                    warn!(error = %join_err, "zone fetch task did not complete");
                    batch_failed = true;
                }
            }
        }

        if batch_failed {
            let message = format!("failed to fetch {} data", kind);
            self.tracker.fail_cycle(&cycle_id, message.clone());
            let mut state = self.state.write();
            state.last_error = Some(message);
            state.loading = false;
            // Previous mapping retained; nothing from this cycle installs
            return RefreshReport {
                cycle_id,
                kind,
                requested,
                fetched: 0,
                failed: requested,
            };
        }

        let fetched = readings.len();
        {
            let mut state = self.state.write();
            match kind {
                MetricKind::Aqi => {
                    state.aqi = readings
                        .into_iter()
                        .filter_map(ZoneReading::into_aqi)
                        .map(|r| (r.zone_id.clone(), r))
                        .collect();
                }
                MetricKind::Flood => {
                    state.flood = readings
                        .into_iter()
                        .filter_map(ZoneReading::into_flood)
                        .map(|r| (r.zone_id.clone(), r))
                        .collect();
                }
                MetricKind::Heatwave => {
                    state.heatwave = readings
                        .into_iter()
                        .filter_map(ZoneReading::into_heatwave)
                        .map(|r| (r.zone_id.clone(), r))
                        .collect();
                }
            }
            state.loading = false;
        }

        self.tracker.complete_cycle(&cycle_id, fetched, failed);
        info!(%kind, fetched, failed, "refresh cycle complete");

        RefreshReport {
            cycle_id,
            kind,
            requested,
            fetched,
            failed,
        }
    }

    /// Refresh all three metric kinds, one cycle each, in tab order.
    pub async fn refresh_all(&self) -> Vec<RefreshReport> {
        let mut reports = Vec::with_capacity(MetricKind::ALL.len());
        for kind in MetricKind::ALL {
            reports.push(self.refresh(kind).await);
        }
        reports
    }

    /// Snapshot of the AQI mapping.
    pub fn aqi_readings(&self) -> HashMap<ZoneId, AqiReading> {
        self.state.read().aqi.clone()
    }

    /// Snapshot of the flood-risk mapping.
    pub fn flood_readings(&self) -> HashMap<ZoneId, FloodReading> {
        self.state.read().flood.clone()
    }

    /// Snapshot of the heatwave mapping.
    pub fn heatwave_readings(&self) -> HashMap<ZoneId, HeatwaveReading> {
        self.state.read().heatwave.clone()
    }

    /// The latest reading for one zone in one kind, if present.
    pub fn zone_reading(&self, kind: MetricKind, zone_id: &ZoneId) -> Option<ZoneReading> {
        let state = self.state.read();
        match kind {
            MetricKind::Aqi => state.aqi.get(zone_id).cloned().map(ZoneReading::Aqi),
            MetricKind::Flood => state.flood.get(zone_id).cloned().map(ZoneReading::Flood),
            MetricKind::Heatwave => state
                .heatwave
                .get(zone_id)
                .cloned()
                .map(ZoneReading::Heatwave),
        }
    }
}
