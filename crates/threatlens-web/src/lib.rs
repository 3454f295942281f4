//! threatlens-web — Server-rendered dashboard for ThreatLens.
//! Provides:
//!   - Overview page with stat cards, charts, and recent alerts
//!   - The two live-analysis panels (hybrid threat + anomaly detector)
//!   - Alerts, reports, and settings pages

pub mod handlers;
pub mod router;
pub mod state;
