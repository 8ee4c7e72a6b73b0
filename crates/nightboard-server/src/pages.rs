//! HTML rendering for the landing page.

use nightboard_core::stats::StatsSnapshot;

use crate::config::AppConfig;
use crate::SERVICE_NAME;

fn escape(v: &str) -> String {
    v.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn percent(v: Option<f32>) -> String {
    match v {
        Some(p) => format!("{p:.1}%"),
        None => "n/a".to_string(),
    }
}

/// Render the dark landing page. `snapshot` is `None` when sampling failed;
/// the page still renders with placeholders.
pub fn render_home(cfg: &AppConfig, snapshot: Option<&StatsSnapshot>) -> String {
    let uptime = match snapshot {
        Some(s) => format!("{}s", s.uptime_seconds()),
        None => "n/a".to_string(),
    };
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>{title}</title>
    <style>
        body {{
            background-color: black;
            color: white;
            font-family: Arial, sans-serif;
            display: flex;
            justify-content: center;
            align-items: center;
            height: 100vh;
            margin: 0;
        }}
        .container {{
            text-align: center;
        }}
        .stats {{
            color: #9e9e9e;
        }}
    </style>
</head>
<body>
    <div class="container">
        <h1>{title}</h1>
        <p>Version: {version}</p>
        <p>Deployed: {deploy_time}</p>
        <p>Host: {hostname}</p>
        <p class="stats">Memory {memory} | CPU {cpu} | Disk {disk} | Up {uptime}</p>
    </div>
</body>
</html>
"#,
        title = SERVICE_NAME,
        version = escape(&cfg.version),
        deploy_time = escape(&cfg.deploy_time),
        hostname = escape(&cfg.hostname),
        memory = percent(snapshot.map(|s| s.memory_percent)),
        cpu = percent(snapshot.map(|s| s.cpu_percent)),
        disk = percent(snapshot.map(|s| s.disk_percent)),
        uptime = uptime,
    )
}
