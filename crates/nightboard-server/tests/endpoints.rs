#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use tower::ServiceExt; // for `oneshot`

use nightboard_core::error::{NightboardError, Result};
use nightboard_core::stats::{StatsProvider, StatsSnapshot};
use nightboard_server::{app_state::AppState, config, router};

struct FixedStats(StatsSnapshot);

#[async_trait]
impl StatsProvider for FixedStats {
    async fn sample(&self) -> Result<StatsSnapshot> {
        Ok(self.0.clone())
    }
}

struct FailingStats;

#[async_trait]
impl StatsProvider for FailingStats {
    async fn sample(&self) -> Result<StatsSnapshot> {
        Err(NightboardError::Stats("simulated outage".into()))
    }
}

fn snapshot(memory: f32, cpu: f32) -> StatsSnapshot {
    StatsSnapshot {
        memory_percent: memory,
        cpu_percent: cpu,
        disk_percent: 40.0,
        uptime: Duration::from_secs(90),
    }
}

fn test_app(provider: Arc<dyn StatsProvider>) -> Router {
    let cfg = config::load_with(|key| match key {
        "APP_VERSION" => Some("2.3.1".into()),
        "DEPLOY_TIME" => Some("2026-01-01 00:00".into()),
        "HOSTNAME" => Some("web-1".into()),
        _ => None,
    })
    .expect("test config");
    router::build_router(AppState::new(cfg, provider))
}

async fn get(app: &Router, path: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .uri(path)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response")
}

async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), 100_000)
        .await
        .expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

#[tokio::test]
async fn home_embeds_config_values() {
    let app = test_app(Arc::new(FixedStats(snapshot(50.0, 10.0))));
    let response = get(&app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("2.3.1"));
    assert!(body.contains("2026-01-01 00:00"));
    assert!(body.contains("web-1"));
}

#[tokio::test]
async fn health_is_healthy_below_thresholds() {
    let app = test_app(Arc::new(FixedStats(snapshot(90.0, 85.0))));
    let response = get(&app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "nightboard");
    assert_eq!(json["version"], "2.3.1");
    assert_eq!(json["metrics"]["uptime"], 90);
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn health_degrades_on_memory_alone() {
    let app = test_app(Arc::new(FixedStats(snapshot(95.0, 10.0))));
    let response = get(&app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["status"], "degraded");
}

#[tokio::test]
async fn health_degrades_on_cpu_alone() {
    let app = test_app(Arc::new(FixedStats(snapshot(10.0, 95.0))));
    let response = get(&app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["status"], "degraded");
}

#[tokio::test]
async fn health_reports_unhealthy_when_sampling_fails() {
    let app = test_app(Arc::new(FailingStats));
    let response = get(&app, "/health").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["status"], "unhealthy");
    assert!(json["error"].as_str().unwrap().contains("simulated outage"));
}

#[tokio::test]
async fn metrics_exposition_has_four_gauge_blocks() {
    let app = test_app(Arc::new(FixedStats(snapshot(41.5, 12.0))));
    let response = get(&app, "/metrics").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .expect("content-type")
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/plain"));

    let body = body_string(response).await;
    for name in [
        "app_memory_usage",
        "app_cpu_usage",
        "app_disk_usage",
        "app_uptime_seconds",
    ] {
        assert_eq!(body.matches(&format!("# HELP {name} ")).count(), 1, "{name}");
        assert_eq!(
            body.matches(&format!("# TYPE {name} gauge")).count(),
            1,
            "{name}"
        );
    }
    assert!(body.contains("app_memory_usage 41.5\n"));
    assert!(body.contains("app_uptime_seconds 90\n"));
    assert!(body.contains("app_http_requests_total"));
}

#[tokio::test]
async fn metrics_failure_stays_plain_text() {
    let app = test_app(Arc::new(FailingStats));
    let response = get(&app, "/metrics").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .expect("content-type")
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/plain"));

    let body = body_string(response).await;
    assert!(body.contains("stats sampling failed"));
}

#[tokio::test]
async fn logs_always_returns_three_lines() {
    let app = test_app(Arc::new(FixedStats(snapshot(50.0, 10.0))));
    let response = get(&app, "/logs").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["count"], 3);
    assert_eq!(json["logs"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn request_counter_counts_completed_requests() {
    let app = test_app(Arc::new(FixedStats(snapshot(50.0, 10.0))));

    for _ in 0..5 {
        let response = get(&app, "/logs").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    // The sixth request renders the totals before it is itself counted.
    let response = get(&app, "/metrics").await;
    let body = body_string(response).await;
    assert!(body.contains("app_http_requests_total 5\n"));
    assert!(body.contains("app_http_requests_by_route_total{method=\"GET\",path=\"/logs\"} 5\n"));
}
