//! Dashboard handler — main landing page: stat cards, the two live
//! panels, chart sections, and the recent-alerts table.

use axum::{extract::State, response::Html};
use threatlens_common::fixtures::{Alert, StatCard, ThreatPoint, ThreatSlice};

use crate::handlers::html_escape;
use crate::handlers::panels::{render_anomaly_panel, render_hybrid_panel};
use crate::state::{AppState, SharedState};

/// Navigation HTML shared across all pages.
pub const NAV_HTML: &str = include_str!("../../templates/nav.html");

pub async fn dashboard(State(state): State<SharedState>) -> Html<String> {
    Html(render_dashboard(&state).await)
}

/// Render the full dashboard from the current app state. Also used by the
/// panel submission handlers so a submit lands back on the same page.
pub async fn render_dashboard(state: &AppState) -> String {
    let hybrid_html = {
        let panel = state.hybrid.lock().await;
        render_hybrid_panel(&panel)
    };
    let anomaly_html = {
        let panel = state.anomaly.lock().await;
        render_anomaly_panel(&panel)
    };

    let body = format!(
        r#"
    <h1 class="page-title">Hybrid Threat Intelligence Dashboard</h1>
    <div class="stats-grid">{stats}</div>
    {hybrid}
    {anomaly}
    <div class="grid-2">
        <div class="card">
            <div class="card-header">Threats Over Time</div>
            {series}
        </div>
        <div class="card">
            <div class="card-header">Threat Breakdown</div>
            {breakdown}
        </div>
    </div>
    <div class="card">
        <div class="card-header">Recent High-Priority Alerts</div>
        {alerts}
    </div>"#,
        stats = render_stat_cards(&state.fixtures.stats),
        hybrid = hybrid_html,
        anomaly = anomaly_html,
        series = render_threat_series(&state.fixtures.threat_series),
        breakdown = render_threat_breakdown(&state.fixtures.threat_types),
        alerts = render_alerts_table(&state.fixtures.recent_alerts),
    );

    page("Dashboard", &body)
}

/// Shared page shell used by every handler.
pub fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} — ThreatLens</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
<div class="app-container">
{nav}
<main class="main-content">
{body}
</main>
</div>
</body>
</html>"#,
        title = title,
        nav = NAV_HTML,
        body = body,
    )
}

pub fn render_stat_cards(stats: &[StatCard]) -> String {
    stats
        .iter()
        .map(|stat| {
            format!(
                r#"
        <div class="stat-card">
            <h3 class="stat-title">{title}</h3>
            <p class="stat-value">{value}</p>
            <div class="stat-change {trend_class}">{glyph} {change}</div>
        </div>"#,
                title = html_escape(&stat.title),
                value = html_escape(&stat.value),
                trend_class = stat.trend.css_class(),
                glyph = stat.trend.glyph(),
                change = html_escape(&stat.change),
            )
        })
        .collect()
}

/// Threats-over-time as a CSS bar chart; no client-side charting engine.
pub fn render_threat_series(series: &[ThreatPoint]) -> String {
    if series.is_empty() {
        return r#"<p class="text-muted">No threat history recorded.</p>"#.to_string();
    }

    let max = series.iter().map(|p| p.threats).max().unwrap_or(1).max(1);
    let bars: String = series
        .iter()
        .map(|point| {
            let pct = point.threats * 100 / max;
            format!(
                r#"
            <div class="chart-column">
                <div class="chart-bar" style="height:{pct}%" title="{threats}"></div>
                <span class="chart-label">{label}</span>
            </div>"#,
                pct = pct,
                threats = point.threats,
                label = html_escape(&point.label),
            )
        })
        .collect();

    format!(r#"<div class="bar-chart">{bars}</div>"#)
}

pub fn render_threat_breakdown(slices: &[ThreatSlice]) -> String {
    if slices.is_empty() {
        return r#"<p class="text-muted">No threat categories recorded.</p>"#.to_string();
    }

    let total: u64 = slices.iter().map(|s| s.value).sum::<u64>().max(1);
    let rows: String = slices
        .iter()
        .map(|slice| {
            let pct = slice.value * 100 / total;
            format!(
                r#"
            <li class="breakdown-row">
                <span class="swatch" style="background:{fill}"></span>
                <span class="breakdown-name">{name}</span>
                <span class="breakdown-value">{value} ({pct}%)</span>
            </li>"#,
                fill = html_escape(&slice.fill),
                name = html_escape(&slice.name),
                value = slice.value,
                pct = pct,
            )
        })
        .collect();

    format!(r#"<ul class="breakdown-list">{rows}</ul>"#)
}

pub fn render_alerts_table(alerts: &[Alert]) -> String {
    let rows: String = if alerts.is_empty() {
        r#"<tr><td colspan="5" class="text-muted">No alerts recorded.</td></tr>"#.to_string()
    } else {
        alerts
            .iter()
            .map(|alert| {
                format!(
                    r#"
            <tr>
                <td class="mono">{id}</td>
                <td>{system}</td>
                <td><span class="badge {severity_class}">{severity}</span></td>
                <td class="text-muted">{time}</td>
                <td><span class="badge {status_class}">{status}</span></td>
            </tr>"#,
                    id = html_escape(&alert.id),
                    system = html_escape(&alert.system),
                    severity_class = alert.severity.css_class(),
                    severity = alert.severity.label(),
                    time = html_escape(&alert.time),
                    status_class = alert.status.css_class(),
                    status = alert.status.label(),
                )
            })
            .collect()
    };

    format!(
        r#"<div class="table-container">
        <table class="table">
            <thead>
                <tr><th>Alert ID</th><th>System</th><th>Severity</th><th>Timestamp</th><th>Status</th></tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    </div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use threatlens_common::fixtures::{AlertStatus, DashboardFixtures, Severity, Trend};

    #[test]
    fn test_stat_cards_render_trend_direction() {
        let fixtures = DashboardFixtures::demo();
        let html = render_stat_cards(&fixtures.stats);
        assert!(html.contains("Total Threats"));
        assert!(html.contains("trend-up"));
        assert!(html.contains("trend-down"));
    }

    #[test]
    fn test_alerts_table_styles_severity_and_status() {
        let fixtures = DashboardFixtures::demo();
        let html = render_alerts_table(&fixtures.recent_alerts);
        assert!(html.contains(Severity::Critical.css_class()));
        assert!(html.contains(AlertStatus::Resolved.css_class()));
        assert!(html.contains("ALERT-001"));
    }

    #[test]
    fn test_empty_fixtures_render_placeholders() {
        let fixtures = DashboardFixtures::empty();
        assert!(render_alerts_table(&fixtures.recent_alerts).contains("No alerts recorded."));
        assert!(render_threat_series(&fixtures.threat_series).contains("No threat history"));
        assert!(render_threat_breakdown(&fixtures.threat_types).contains("No threat categories"));
    }

    #[test]
    fn test_bar_chart_scales_to_tallest_month() {
        let series = vec![
            ThreatPoint { label: "Jan".to_string(), threats: 50 },
            ThreatPoint { label: "Feb".to_string(), threats: 100 },
        ];
        let html = render_threat_series(&series);
        assert!(html.contains("height:50%"));
        assert!(html.contains("height:100%"));
    }

    #[test]
    fn test_fixture_substitution_flows_through() {
        // Fixtures are injected, not ambient: an alternative dataset shows
        // up verbatim.
        let stats = vec![StatCard {
            title: "Custom Metric".to_string(),
            value: "7".to_string(),
            change: "+0.0%".to_string(),
            trend: Trend::Increase,
        }];
        assert!(render_stat_cards(&stats).contains("Custom Metric"));
    }
}
