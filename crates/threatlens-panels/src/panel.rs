//! The panel state machine and the two panel units built on it.
//!
//! States: {Idle, Pending, Ready, Failed}. Submit moves any state to
//! Pending; the response moves Pending to Ready or Failed. There is no
//! retry and no cancellation, but every submission carries a sequence
//! number and a completion for a superseded submission is discarded, so
//! the panel always reflects its most recent submit.

use threatlens_model::{AnomalyPrediction, AnomalyProvider, HybridPrediction, HybridProvider};

use crate::features::FeatureVector;
use crate::form::TrafficLogForm;

/// Fixed operator-facing message for any failed model call. The actual
/// cause goes to the log, never the result region.
pub const MODEL_UNREACHABLE_MSG: &str = "Could not connect to the model.";

/// Current phase of a panel's result region.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelPhase<T> {
    /// Nothing submitted yet this session.
    Idle,
    /// A submission is in flight; the previous result is suppressed.
    Pending,
    /// Most recent submission succeeded.
    Ready(T),
    /// Most recent submission failed; carries the operator message.
    Failed(String),
}

/// Ticket handed out per submission; completions must present it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission(u64);

/// One panel's result state. Holds at most one outcome, replaced wholesale
/// per submission.
#[derive(Debug, Clone)]
pub struct PanelState<T> {
    phase: PanelPhase<T>,
    seq: u64,
}

impl<T> PanelState<T> {
    pub fn new() -> Self {
        Self {
            phase: PanelPhase::Idle,
            seq: 0,
        }
    }

    pub fn phase(&self) -> &PanelPhase<T> {
        &self.phase
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, PanelPhase::Pending)
    }

    /// Start a submission: clear to Pending and issue a ticket.
    pub fn begin(&mut self) -> Submission {
        self.seq += 1;
        self.phase = PanelPhase::Pending;
        Submission(self.seq)
    }

    /// Land an outcome. Returns false (and changes nothing) when the
    /// ticket belongs to a superseded submission.
    pub fn complete(&mut self, submission: Submission, outcome: Result<T, String>) -> bool {
        if submission.0 != self.seq {
            return false;
        }
        self.phase = match outcome {
            Ok(value) => PanelPhase::Ready(value),
            Err(message) => PanelPhase::Failed(message),
        };
        true
    }

    /// What the result region shows, in precedence order: busy indicator
    /// while pending, then the prompt, then an error, then the outcome.
    pub fn view(&self) -> ResultView<'_, T> {
        match &self.phase {
            PanelPhase::Pending => ResultView::Busy,
            PanelPhase::Idle => ResultView::Prompt,
            PanelPhase::Failed(message) => ResultView::Error(message),
            PanelPhase::Ready(value) => ResultView::Outcome(value),
        }
    }
}

impl<T> Default for PanelState<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Render-facing projection of a panel state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultView<'a, T> {
    Busy,
    Prompt,
    Error(&'a str),
    Outcome(&'a T),
}

// ── Hybrid Analysis Panel ──────────────────────────────────────────────────

/// Traffic-log form + hybrid verdict state.
#[derive(Debug, Clone, Default)]
pub struct HybridPanel {
    pub form: TrafficLogForm,
    pub state: PanelState<HybridPrediction>,
}

impl HybridPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one field edit.
    pub fn edit(&mut self, name: &str, raw: &str) -> bool {
        self.form.set(name, raw)
    }

    /// Submit the current form: Pending, one POST, then Ready or Failed.
    pub async fn submit(&mut self, provider: &dyn HybridProvider) {
        let payload = self.form.payload();
        let submission = self.state.begin();

        let outcome = match provider.predict_hybrid(payload).await {
            Ok(prediction) => Ok(prediction),
            Err(cause) => {
                tracing::warn!(error = %cause, "hybrid analysis prediction failed");
                Err(MODEL_UNREACHABLE_MSG.to_string())
            }
        };

        self.state.complete(submission, outcome);
    }
}

// ── Anomaly Detector Panel ─────────────────────────────────────────────────

/// 32-feature vector + anomaly verdict state.
#[derive(Debug, Clone, Default)]
pub struct AnomalyPanel {
    pub features: FeatureVector,
    pub state: PanelState<AnomalyPrediction>,
}

impl AnomalyPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit(&mut self, key: &str, raw: &str) -> bool {
        self.features.set(key, raw)
    }

    pub async fn submit(&mut self, provider: &dyn AnomalyProvider) {
        let payload = self.features.payload();
        let submission = self.state.begin();

        let outcome = match provider.predict_anomaly(payload).await {
            Ok(prediction) => Ok(prediction),
            Err(cause) => {
                tracing::warn!(error = %cause, "anomaly prediction failed");
                Err(MODEL_UNREACHABLE_MSG.to_string())
            }
        };

        self.state.complete(submission, outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use threatlens_model::{MockAnomalyProvider, MockHybridProvider};

    fn normal_prediction() -> HybridPrediction {
        HybridPrediction {
            verdict: "Normal Traffic".to_string(),
            anomaly_score: 0.01,
            is_known_threat: false,
        }
    }

    #[test]
    fn test_initial_phase_is_idle() {
        let state: PanelState<HybridPrediction> = PanelState::new();
        assert_eq!(*state.phase(), PanelPhase::Idle);
        assert_eq!(state.view(), ResultView::Prompt);
    }

    #[test]
    fn test_begin_suppresses_previous_result() {
        let mut state: PanelState<u32> = PanelState::new();
        let first = state.begin();
        assert!(state.complete(first, Ok(7)));
        assert_eq!(*state.phase(), PanelPhase::Ready(7));

        state.begin();
        assert!(state.is_pending());
        assert_eq!(state.view(), ResultView::Busy);
    }

    #[test]
    fn test_failed_then_resubmit_goes_pending() {
        let mut state: PanelState<u32> = PanelState::new();
        let ticket = state.begin();
        assert!(state.complete(ticket, Err("boom".to_string())));
        assert_eq!(state.view(), ResultView::Error("boom"));

        state.begin();
        assert!(state.is_pending());
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut state: PanelState<u32> = PanelState::new();
        let first = state.begin();
        let second = state.begin();

        // First response arrives while the second is in flight: ignored,
        // panel stays Pending.
        assert!(!state.complete(first, Ok(1)));
        assert!(state.is_pending());

        // The live submission lands.
        assert!(state.complete(second, Ok(2)));
        assert_eq!(*state.phase(), PanelPhase::Ready(2));

        // A straggler from the superseded submission cannot clobber it.
        assert!(!state.complete(first, Err("late".to_string())));
        assert_eq!(*state.phase(), PanelPhase::Ready(2));
    }

    #[tokio::test]
    async fn test_hybrid_submit_success() {
        let provider = MockHybridProvider::new().with(normal_prediction());
        let mut panel = HybridPanel::new();

        panel.submit(&provider).await;

        match panel.state.phase() {
            PanelPhase::Ready(prediction) => {
                assert_eq!(prediction.verdict, "Normal Traffic");
                assert!(!prediction.is_known_threat);
            }
            other => panic!("expected Ready, got {other:?}"),
        }

        // The seeded defaults went over the wire with their declared types.
        let payload = provider.last_payload().unwrap();
        assert_eq!(payload["proto"].as_str(), Some("tcp"));
        assert_eq!(payload["duration"].as_f64(), Some(0.009));
        assert_eq!(payload["orig_ip_bytes"].as_f64(), Some(40.0));
    }

    #[tokio::test]
    async fn test_hybrid_submit_failure_uses_fixed_message() {
        let provider = MockHybridProvider::new(); // no canned response → 503
        let mut panel = HybridPanel::new();

        panel.submit(&provider).await;

        assert_eq!(
            *panel.state.phase(),
            PanelPhase::Failed(MODEL_UNREACHABLE_MSG.to_string())
        );
    }

    #[tokio::test]
    async fn test_anomaly_submit_coerces_empty_feature_to_zero() {
        let provider = MockAnomalyProvider::new().with(AnomalyPrediction {
            is_anomaly: false,
            reconstruction_error: 0.1,
            threshold: 0.5,
        });
        let mut panel = AnomalyPanel::new();
        panel.edit("feature_5", "");

        panel.submit(&provider).await;

        let payload = provider.last_payload().unwrap();
        let object = payload.as_object().unwrap();
        assert_eq!(object.len(), 32);
        assert_eq!(object["feature_5"].as_f64(), Some(0.0));
        assert!(matches!(panel.state.phase(), PanelPhase::Ready(_)));
    }

    #[tokio::test]
    async fn test_anomaly_submit_failure() {
        let provider = MockAnomalyProvider::new();
        let mut panel = AnomalyPanel::new();

        panel.submit(&provider).await;

        assert_eq!(
            *panel.state.phase(),
            PanelPhase::Failed(MODEL_UNREACHABLE_MSG.to_string())
        );
    }

    #[tokio::test]
    async fn test_panels_are_independent() {
        let hybrid_provider = MockHybridProvider::new().with(normal_prediction());
        let mut hybrid = HybridPanel::new();
        let mut anomaly = AnomalyPanel::new();

        hybrid.submit(&hybrid_provider).await;

        assert!(matches!(hybrid.state.phase(), PanelPhase::Ready(_)));
        assert_eq!(*anomaly.state.phase(), PanelPhase::Idle);
        anomaly.edit("feature_1", "3.5");
        assert_eq!(hybrid.form.get("duration").unwrap().display(), "0.009");
    }
}
