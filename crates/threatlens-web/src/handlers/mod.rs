//! HTTP handlers for all web routes.

pub mod alerts;
pub mod dashboard;
pub mod panels;
pub mod reports;
pub mod settings;

/// Minimal HTML attribute/text escaping for values echoed back into markup.
pub fn html_escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
