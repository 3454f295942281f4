//! Settings page — shows where the dashboard sends its predictions.

use axum::{extract::State, response::Html};

use crate::handlers::dashboard::page;
use crate::handlers::html_escape;
use crate::state::SharedState;

pub async fn settings_page(State(state): State<SharedState>) -> Html<String> {
    let body = format!(
        r#"
    <h1 class="page-title">Settings</h1>
    <div class="card">
        <div class="card-header">Model Endpoint</div>
        <p class="text-muted">Prediction requests are sent to the configured inference API.
        Override the base URL in <code>threatlens.toml</code>.</p>
        <table class="table">
            <tbody>
                <tr><td>Base URL</td><td class="mono">{base_url}</td></tr>
                <tr><td>Hybrid analysis</td><td class="mono">POST /predict/hybrid-analysis</td></tr>
                <tr><td>Anomaly detector</td><td class="mono">POST /predictanomaly</td></tr>
            </tbody>
        </table>
    </div>"#,
        base_url = html_escape(&state.model_base_url),
    );
    Html(page("Settings", &body))
}
