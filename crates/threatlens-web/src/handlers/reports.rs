//! Reports page — threat trend and category breakdown on their own mount.

use axum::{extract::State, response::Html};

use crate::handlers::dashboard::{page, render_threat_breakdown, render_threat_series};
use crate::state::SharedState;

pub async fn reports_page(State(state): State<SharedState>) -> Html<String> {
    let body = format!(
        r#"
    <h1 class="page-title">Reports</h1>
    <div class="grid-2">
        <div class="card">
            <div class="card-header">Threats Over Time</div>
            {series}
        </div>
        <div class="card">
            <div class="card-header">Threat Breakdown</div>
            {breakdown}
        </div>
    </div>"#,
        series = render_threat_series(&state.fixtures.threat_series),
        breakdown = render_threat_breakdown(&state.fixtures.threat_types),
    );
    Html(page("Reports", &body))
}
