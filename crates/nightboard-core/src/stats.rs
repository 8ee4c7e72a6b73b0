//! Stats snapshot, health classification, and the provider seam.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

/// Memory-used percentage above which the service reports itself degraded.
pub const MEMORY_DEGRADED_PERCENT: f32 = 90.0;
/// CPU-used percentage above which the service reports itself degraded.
pub const CPU_DEGRADED_PERCENT: f32 = 85.0;

/// Point-in-time read of host utilization plus process uptime.
///
/// Recomputed on every sample; never cached.
#[derive(Debug, Clone)]
pub struct StatsSnapshot {
    pub memory_percent: f32,
    pub cpu_percent: f32,
    pub disk_percent: f32,
    pub uptime: Duration,
}

/// Health verdict derived from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthState {
    Healthy,
    Degraded,
}

impl HealthState {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            HealthState::Healthy => "healthy",
            HealthState::Degraded => "degraded",
        }
    }
}

impl StatsSnapshot {
    /// Either threshold alone degrades; values exactly at a threshold are
    /// still healthy.
    pub fn health_state(&self) -> HealthState {
        if self.memory_percent > MEMORY_DEGRADED_PERCENT || self.cpu_percent > CPU_DEGRADED_PERCENT
        {
            HealthState::Degraded
        } else {
            HealthState::Healthy
        }
    }

    /// Uptime as whole seconds, the granularity every surface reports.
    pub fn uptime_seconds(&self) -> u64 {
        self.uptime.as_secs()
    }
}

/// Host statistics provider.
///
/// The only non-trivial collaborator of the service; kept behind a trait so
/// handlers can be exercised against fixed or failing doubles.
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Take a fresh snapshot. May take up to the provider's CPU sampling
    /// window (~1 s for the live implementation).
    async fn sample(&self) -> Result<StatsSnapshot>;
}
