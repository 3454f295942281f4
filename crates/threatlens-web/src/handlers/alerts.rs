//! Alerts page — the full recent-alerts table on its own mount.

use axum::{extract::State, response::Html};

use crate::handlers::dashboard::{page, render_alerts_table};
use crate::state::SharedState;

pub async fn alerts_page(State(state): State<SharedState>) -> Html<String> {
    let body = format!(
        r#"
    <h1 class="page-title">Alerts</h1>
    <div class="card">
        <div class="card-header">Recent High-Priority Alerts</div>
        {table}
    </div>"#,
        table = render_alerts_table(&state.fixtures.recent_alerts),
    );
    Html(page("Alerts", &body))
}
