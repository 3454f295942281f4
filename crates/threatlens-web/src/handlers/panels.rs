//! The two live-analysis panels: form markup, submission handlers, and the
//! conditional result regions.

use axum::{extract::State, response::Html, Form};
use threatlens_model::{AnomalyPrediction, HybridPrediction};
use threatlens_panels::verdict::{format_scalar, style_for_label};
use threatlens_panels::{AnomalyPanel, HybridPanel, PanelState, ResultView};

use crate::handlers::dashboard::render_dashboard;
use crate::handlers::html_escape;
use crate::state::SharedState;

/// POST /panel/hybrid — apply the submitted edits field by field, run one
/// prediction, re-render the dashboard.
pub async fn hybrid_submit(
    State(state): State<SharedState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Html<String> {
    {
        let mut panel = state.hybrid.lock().await;
        for (name, raw) in &fields {
            if !panel.edit(name, raw) {
                tracing::debug!(field = %name, "ignoring unknown hybrid form field");
            }
        }
        panel.submit(state.hybrid_provider.as_ref()).await;
    }
    Html(render_dashboard(&state).await)
}

/// POST /panel/anomaly — same lifecycle for the 32-feature detector.
pub async fn anomaly_submit(
    State(state): State<SharedState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Html<String> {
    {
        let mut panel = state.anomaly.lock().await;
        for (key, raw) in &fields {
            if !panel.edit(key, raw) {
                tracing::debug!(field = %key, "ignoring unknown feature field");
            }
        }
        panel.submit(state.anomaly_provider.as_ref()).await;
    }
    Html(render_dashboard(&state).await)
}

// ── Hybrid Analysis Panel ──────────────────────────────────────────────────

pub fn render_hybrid_panel(panel: &HybridPanel) -> String {
    let inputs: String = panel
        .form
        .fields()
        .map(|(name, value)| {
            let step = if name == "duration" { "0.001" } else { "1" };
            format!(
                r#"
            <div class="field">
                <label for="{name}">{label}</label>
                <input type="{input_type}" id="{name}" name="{name}" value="{value}" step="{step}" required>
            </div>"#,
                name = name,
                label = name.replace('_', " "),
                input_type = value.input_type(),
                value = html_escape(&value.display()),
                step = step,
            )
        })
        .collect();

    format!(
        r#"
    <div class="card panel" id="hybrid-panel">
        <div class="card-header">Live Hybrid Threat Analysis</div>
        <form method="post" action="/panel/hybrid">
            <div class="field-grid field-grid-5">{inputs}
            </div>
            <div class="panel-actions">
                <button type="submit" class="btn btn-primary">Analyze</button>
            </div>
        </form>
        <div class="result-region">{result}</div>
    </div>"#,
        inputs = inputs,
        result = render_hybrid_result(&panel.state),
    )
}

/// Result region, evaluated in precedence order:
/// busy → prompt → error → verdict.
pub fn render_hybrid_result(state: &PanelState<HybridPrediction>) -> String {
    match state.view() {
        ResultView::Busy => {
            r#"<div class="busy">Analyzing traffic log...</div>"#.to_string()
        }
        ResultView::Prompt => {
            r#"<p class="prompt">Enter traffic log data to run a hybrid analysis.</p>"#.to_string()
        }
        ResultView::Error(message) => format!(
            r#"<p class="panel-error">⚠️ {}</p>"#,
            html_escape(message)
        ),
        ResultView::Outcome(prediction) => {
            let style = style_for_label(&prediction.verdict);
            let threat_class = if prediction.is_known_threat {
                "text-danger"
            } else {
                "text-ok"
            };
            let threat_label = if prediction.is_known_threat { "Yes" } else { "No" };
            format!(
                r#"
            <div class="{box_class}">
                <div class="verdict-headline {text_class}">{glyph} {verdict}</div>
                <div class="verdict-detail">
                    <span>Anomaly Score: <b>{score}</b></span>
                    <span class="sep">|</span>
                    <span>Known Threat: <b class="{threat_class}">{threat_label}</b></span>
                </div>
            </div>"#,
                box_class = style.box_class,
                text_class = style.text_class,
                glyph = style.glyph,
                verdict = html_escape(&prediction.verdict),
                score = format_scalar(prediction.anomaly_score),
                threat_class = threat_class,
                threat_label = threat_label,
            )
        }
    }
}

// ── Anomaly Detector Panel ─────────────────────────────────────────────────

pub fn render_anomaly_panel(panel: &AnomalyPanel) -> String {
    let inputs: String = panel
        .features
        .entries()
        .map(|(key, raw)| {
            let label = key
                .replace("feature_", "F ")
                .replace('_', " ");
            format!(
                r#"
            <div class="field">
                <label for="{key}">{label}</label>
                <input type="number" id="{key}" name="{key}" value="{value}" step="any" required>
            </div>"#,
                key = key,
                label = label,
                value = html_escape(raw),
            )
        })
        .collect();

    format!(
        r#"
    <div class="card panel" id="anomaly-panel">
        <div class="card-header">Live Anomaly Detector</div>
        <form method="post" action="/panel/anomaly">
            <div class="field-grid field-grid-8">{inputs}
            </div>
            <div class="panel-actions">
                <button type="submit" class="btn btn-primary">Analyze</button>
            </div>
        </form>
        <div class="result-region">{result}</div>
    </div>"#,
        inputs = inputs,
        result = render_anomaly_result(&panel.state),
    )
}

pub fn render_anomaly_result(state: &PanelState<AnomalyPrediction>) -> String {
    match state.view() {
        ResultView::Busy => r#"<div class="busy">Analyzing...</div>"#.to_string(),
        ResultView::Prompt => {
            r#"<p class="prompt">Enter feature values to run a prediction.</p>"#.to_string()
        }
        ResultView::Error(message) => format!(
            r#"<p class="panel-error">⚠️ {}</p>"#,
            html_escape(message)
        ),
        ResultView::Outcome(prediction) => {
            let (box_class, text_class, headline) = if prediction.is_anomaly {
                (
                    "verdict-box verdict-critical",
                    "verdict-text-critical",
                    "🚨 Anomaly Detected",
                )
            } else {
                (
                    "verdict-box verdict-normal",
                    "verdict-text-normal",
                    "✅ System Normal",
                )
            };
            format!(
                r#"
            <div class="{box_class}">
                <div class="verdict-headline {text_class}">{headline}</div>
                <div class="verdict-detail">
                    <span>Reconstruction Error: <b>{error}</b></span>
                    <span>Threshold: <b>{threshold}</b></span>
                </div>
            </div>"#,
                box_class = box_class,
                text_class = text_class,
                headline = headline,
                error = format_scalar(prediction.reconstruction_error),
                threshold = format_scalar(prediction.threshold),
            )
        }
    }
}
