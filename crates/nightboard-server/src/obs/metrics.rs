//! Minimal metrics registry for the server.
//!
//! Counters are plain atomics; labeled counters are backed by `DashMap` with
//! labels flattened into sorted key vectors to keep deterministic ordering.
//! Rendering produces Prometheus text exposition with one `HELP` and one
//! `TYPE` line per metric.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use nightboard_core::stats::StatsSnapshot;

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<Vec<(String, String)>, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.add(labels, 1);
    }

    /// Increment by an arbitrary value.
    pub fn add(&self, labels: &[(&str, &str)], v: u64) {
        let mut key: Vec<(String, String)> = labels
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        key.sort();

        let counter = self.map.entry(key).or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
    }

    /// Render in Prometheus text exposition format. Rows are sorted so the
    /// output is stable across scrapes.
    fn render(&self, name: &str, help: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {name} {help}");
        let _ = writeln!(out, "# TYPE {name} counter");
        let mut rows: Vec<(String, u64)> = self
            .map
            .iter()
            .map(|r| {
                let labels = r
                    .key()
                    .iter()
                    .map(|(k, v)| format!("{k}=\"{}\"", escape_label(v)))
                    .collect::<Vec<_>>()
                    .join(",");
                (labels, r.value().load(Ordering::Relaxed))
            })
            .collect();
        rows.sort();
        for (labels, val) in rows {
            let _ = writeln!(out, "{name}{{{labels}}} {val}");
        }
    }
}

/// Process-wide request accounting plus snapshot exposition.
#[derive(Default)]
pub struct ServerMetrics {
    requests_total: AtomicU64,
    requests_by_route: CounterVec,
}

impl ServerMetrics {
    /// Count one handled request.
    pub fn record(&self, method: &str, path: &str) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        self.requests_by_route
            .inc(&[("method", method), ("path", path)]);
    }

    pub fn requests_total(&self) -> u64 {
        self.requests_total.load(Ordering::Relaxed)
    }

    /// Render the full exposition for one stats snapshot.
    pub fn render(&self, snap: &StatsSnapshot) -> String {
        let mut out = String::new();
        gauge(
            &mut out,
            "app_memory_usage",
            "Host memory used, percent",
            snap.memory_percent,
        );
        gauge(
            &mut out,
            "app_cpu_usage",
            "Host CPU used, percent",
            snap.cpu_percent,
        );
        gauge(
            &mut out,
            "app_disk_usage",
            "Root filesystem used, percent",
            snap.disk_percent,
        );
        let _ = writeln!(out, "# HELP app_uptime_seconds Process uptime in seconds");
        let _ = writeln!(out, "# TYPE app_uptime_seconds gauge");
        let _ = writeln!(out, "app_uptime_seconds {}", snap.uptime_seconds());

        let _ = writeln!(
            out,
            "# HELP app_http_requests_total HTTP requests handled since start"
        );
        let _ = writeln!(out, "# TYPE app_http_requests_total counter");
        let _ = writeln!(out, "app_http_requests_total {}", self.requests_total());

        self.requests_by_route.render(
            "app_http_requests_by_route_total",
            "HTTP requests handled, by method and path",
            &mut out,
        );
        out
    }
}

fn gauge(out: &mut String, name: &str, help: &str, v: f32) {
    let _ = writeln!(out, "# HELP {name} {help}");
    let _ = writeln!(out, "# TYPE {name} gauge");
    let _ = writeln!(out, "{name} {v:.1}");
}
