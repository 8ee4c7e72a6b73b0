//! sysinfo-backed [`StatsProvider`].
//!
//! Keeps one reusable `sysinfo::System`/`Disks` pair behind an async mutex so
//! samples do not reallocate and concurrent samples serialize. CPU usage is a
//! delta between two refreshes, so every sample waits out the configured
//! window (~1 s by default) between them.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use sysinfo::{CpuRefreshKind, Disks, MemoryRefreshKind, RefreshKind, System};
use tokio::sync::Mutex;

use nightboard_core::error::{NightboardError, Result};
use nightboard_core::stats::{StatsProvider, StatsSnapshot};

/// Window between the two CPU refreshes of one sample.
pub const DEFAULT_CPU_WINDOW: Duration = Duration::from_secs(1);

pub struct SystemStats {
    sampler: Mutex<Sampler>,
    started: Instant,
    cpu_window: Duration,
}

struct Sampler {
    sys: System,
    disks: Disks,
}

impl SystemStats {
    /// Provider with the default ~1 s CPU window. `started` is the process
    /// start instant uptime is measured from.
    pub fn new(started: Instant) -> Self {
        Self::with_cpu_window(started, DEFAULT_CPU_WINDOW)
    }

    pub fn with_cpu_window(started: Instant, cpu_window: Duration) -> Self {
        // Initial refresh so the first sample already has a CPU baseline.
        let mut sys = System::new_with_specifics(
            RefreshKind::new()
                .with_cpu(CpuRefreshKind::everything())
                .with_memory(MemoryRefreshKind::everything()),
        );
        sys.refresh_cpu_usage();
        sys.refresh_memory();

        let disks = Disks::new_with_refreshed_list();

        Self {
            sampler: Mutex::new(Sampler { sys, disks }),
            started,
            cpu_window,
        }
    }
}

#[async_trait]
impl StatsProvider for SystemStats {
    async fn sample(&self) -> Result<StatsSnapshot> {
        let mut s = self.sampler.lock().await;

        s.sys.refresh_cpu_usage();
        tokio::time::sleep(self.cpu_window).await;
        s.sys.refresh_cpu_usage();
        s.sys.refresh_memory();
        s.disks.refresh();
        if s.disks.list().is_empty() {
            s.disks.refresh_list();
        }

        let total_memory = s.sys.total_memory();
        if total_memory == 0 {
            return Err(NightboardError::Stats(
                "host reported zero total memory".into(),
            ));
        }
        let memory_percent = (s.sys.used_memory() as f64 / total_memory as f64 * 100.0) as f32;
        let cpu_percent = s.sys.global_cpu_usage();

        let (used, total) = s
            .disks
            .list()
            .iter()
            .fold((0u128, 0u128), |(used, total), disk| {
                let total_space = disk.total_space() as u128;
                let available = disk.available_space() as u128;
                (
                    used + total_space.saturating_sub(available),
                    total + total_space,
                )
            });
        // A host with no readable disks reports 0.0 rather than failing.
        let disk_percent = if total > 0 {
            (used as f64 / total as f64 * 100.0) as f32
        } else {
            0.0
        };

        Ok(StatsSnapshot {
            memory_percent,
            cpu_percent,
            disk_percent,
            uptime: self.started.elapsed(),
        })
    }
}
