//! Refresh-cycle tracking.
//!
//! This module provides a simple in-memory tracker that records each refresh
//! cycle with its per-zone failure log, feeding the dashboard's activity
//! panel.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::MetricKind;

/// A single log entry with timestamp and message.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LogEntry {
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub level: LogLevel,
    pub message: String,
}

#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Cycle status enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CycleStatus {
    Running,
    Completed,
    Failed,
}

/// One refresh cycle's metadata and logs.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RefreshCycle {
    pub cycle_id: String,
    pub kind: MetricKind,
    pub status: CycleStatus,
    pub logs: Vec<LogEntry>,
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,
    /// Zones whose fetch succeeded this cycle
    pub zones_fetched: usize,
    /// Zones omitted from the mapping this cycle
    pub zones_failed: usize,
}

/// In-memory refresh-cycle tracker.
#[derive(Clone)]
pub struct CycleTracker {
    cycles: Arc<RwLock<HashMap<String, RefreshCycle>>>,
}

impl CycleTracker {
    /// Create a new cycle tracker.
    pub fn new() -> Self {
        Self {
            cycles: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Record the start of a refresh cycle and return its ID.
    pub fn start_cycle(&self, kind: MetricKind) -> String {
        let cycle_id = Uuid::new_v4().to_string();
        let cycle = RefreshCycle {
            cycle_id: cycle_id.clone(),
            kind,
            status: CycleStatus::Running,
            logs: vec![],
            started_at: chrono::Utc::now(),
            completed_at: None,
            zones_fetched: 0,
            zones_failed: 0,
        };
        self.cycles.write().insert(cycle_id.clone(), cycle);
        cycle_id
    }

    /// Add a log entry to a cycle.
    pub fn log(&self, cycle_id: &str, level: LogLevel, message: impl Into<String>) {
        let mut cycles = self.cycles.write();
        if let Some(cycle) = cycles.get_mut(cycle_id) {
            cycle.logs.push(LogEntry {
                timestamp: chrono::Utc::now(),
                level,
                message: message.into(),
            });
        }
    }

    /// Mark a cycle as completed with its per-zone tallies.
    pub fn complete_cycle(&self, cycle_id: &str, fetched: usize, failed: usize) {
        let mut cycles = self.cycles.write();
        if let Some(cycle) = cycles.get_mut(cycle_id) {
            cycle.status = CycleStatus::Completed;
            cycle.completed_at = Some(chrono::Utc::now());
            cycle.zones_fetched = fetched;
            cycle.zones_failed = failed;
        }
    }

    /// Mark a cycle as failed.
    pub fn fail_cycle(&self, cycle_id: &str, error_message: impl Into<String>) {
        let mut cycles = self.cycles.write();
        if let Some(cycle) = cycles.get_mut(cycle_id) {
            cycle.status = CycleStatus::Failed;
            cycle.completed_at = Some(chrono::Utc::now());
            cycle.logs.push(LogEntry {
                timestamp: chrono::Utc::now(),
                level: LogLevel::Error,
                message: error_message.into(),
            });
        }
    }

    /// Get a cycle by ID.
    pub fn get_cycle(&self, cycle_id: &str) -> Option<RefreshCycle> {
        self.cycles.read().get(cycle_id).cloned()
    }

    /// The most recently started cycle for a kind.
    pub fn latest_cycle(&self, kind: MetricKind) -> Option<RefreshCycle> {
        self.cycles
            .read()
            .values()
            .filter(|c| c.kind == kind)
            .max_by_key(|c| c.started_at)
            .cloned()
    }

    /// Number of recorded cycles across all kinds.
    pub fn cycle_count(&self) -> usize {
        self.cycles.read().len()
    }
}

impl Default for CycleTracker {
    fn default() -> Self {
        Self::new()
    }
}
