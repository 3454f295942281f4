//! Shared application state for the web server.

use std::sync::Arc;
use tokio::sync::Mutex;

use threatlens_common::config::Config;
use threatlens_common::fixtures::DashboardFixtures;
use threatlens_model::{AnomalyProvider, HybridProvider, ModelClient};
use threatlens_panels::{AnomalyPanel, HybridPanel};

/// Shared state injected into every Axum handler.
///
/// Each panel lives behind its own Mutex: the panels own no state in
/// common, and a submission on one never blocks the other. Holding a
/// panel's lock across its model round-trip serialises that panel's
/// submissions, so the stale-sequence discard in the panel state machine
/// is the backstop rather than the common path.
pub struct AppState {
    pub fixtures: DashboardFixtures,
    pub model_base_url: String,
    pub hybrid_provider: Arc<dyn HybridProvider>,
    pub anomaly_provider: Arc<dyn AnomalyProvider>,
    pub hybrid: Mutex<HybridPanel>,
    pub anomaly: Mutex<AnomalyPanel>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let client = Arc::new(ModelClient::new(&config.model));
        Self::with_providers(
            DashboardFixtures::demo(),
            config.model.base_url.clone(),
            client.clone(),
            client,
        )
    }

    /// Full injection point — tests substitute fixtures and providers here.
    pub fn with_providers(
        fixtures: DashboardFixtures,
        model_base_url: String,
        hybrid_provider: Arc<dyn HybridProvider>,
        anomaly_provider: Arc<dyn AnomalyProvider>,
    ) -> Self {
        Self {
            fixtures,
            model_base_url,
            hybrid_provider,
            anomaly_provider,
            hybrid: Mutex::new(HybridPanel::new()),
            anomaly: Mutex::new(AnomalyPanel::new()),
        }
    }
}

pub type SharedState = Arc<AppState>;
