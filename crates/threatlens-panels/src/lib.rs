//! threatlens-panels — The live-analysis panel core.
//!
//! Each panel is a self-contained unit: a mutable input model, a submit
//! action that performs one model request, and a result-or-error state
//! rendered conditionally. The two panels share nothing but the panel
//! state machine and the model provider traits.

pub mod features;
pub mod form;
pub mod panel;
pub mod verdict;

pub use features::{FeatureVector, FEATURE_COUNT};
pub use form::{FieldValue, TrafficLogForm};
pub use panel::{
    AnomalyPanel, HybridPanel, PanelPhase, PanelState, ResultView, Submission,
    MODEL_UNREACHABLE_MSG,
};
pub use verdict::{format_scalar, Verdict, VerdictStyle};
