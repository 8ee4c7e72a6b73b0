//! Synthetic log endpoint.

use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::SERVICE_NAME;

#[derive(Serialize)]
pub struct LogsBody {
    logs: Vec<String>,
    count: usize,
}

/// `GET /logs`: a fixed demonstration payload, not a real log store. Always
/// three lines, stamped at request time.
pub async fn logs() -> Json<LogsBody> {
    let now = Utc::now().to_rfc3339();
    let logs = vec![
        format!("{now} INFO {SERVICE_NAME}: service is running"),
        format!("{now} INFO {SERVICE_NAME}: all routes registered"),
        format!("{now} INFO {SERVICE_NAME}: stats provider ready"),
    ];
    let count = logs.len();
    Json(LogsBody { logs, count })
}
