//! The closed verdict enumeration and its display styling.

/// Categorical verdicts the hybrid endpoint is known to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    ConfirmedKnownThreat,
    UnknownAnomaly,
    LowAndSlow,
    NormalTraffic,
}

/// Display descriptor for one verdict: result-box style, text style, glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerdictStyle {
    pub box_class: &'static str,
    pub text_class: &'static str,
    pub glyph: &'static str,
}

impl Verdict {
    pub const ALL: [Verdict; 4] = [
        Verdict::ConfirmedKnownThreat,
        Verdict::UnknownAnomaly,
        Verdict::LowAndSlow,
        Verdict::NormalTraffic,
    ];

    /// The exact wire string for this verdict.
    pub fn label(self) -> &'static str {
        match self {
            Verdict::ConfirmedKnownThreat => "Confirmed Known Threat",
            Verdict::UnknownAnomaly => "Unknown Anomaly Detected (Potential Zero-Day)",
            Verdict::LowAndSlow => {
                "Known Threat Pattern Detected (Low-and-Slow Activity)"
            }
            Verdict::NormalTraffic => "Normal Traffic",
        }
    }

    /// Exact-match lookup against the wire string.
    pub fn from_label(label: &str) -> Option<Verdict> {
        Verdict::ALL.into_iter().find(|v| v.label() == label)
    }

    pub fn style(self) -> VerdictStyle {
        match self {
            Verdict::ConfirmedKnownThreat => VerdictStyle {
                box_class: "verdict-box verdict-critical",
                text_class: "verdict-text-critical",
                glyph: "🚨",
            },
            Verdict::UnknownAnomaly => VerdictStyle {
                box_class: "verdict-box verdict-zero-day",
                text_class: "verdict-text-zero-day",
                glyph: "⚠️",
            },
            Verdict::LowAndSlow => VerdictStyle {
                box_class: "verdict-box verdict-low-slow",
                text_class: "verdict-text-low-slow",
                glyph: "🔎",
            },
            Verdict::NormalTraffic => VerdictStyle {
                box_class: "verdict-box verdict-normal",
                text_class: "verdict-text-normal",
                glyph: "✅",
            },
        }
    }
}

/// Style for an arbitrary verdict string from the model. Anything outside
/// the closed enumeration renders with the "Normal Traffic" style; the raw
/// label itself is still shown.
pub fn style_for_label(label: &str) -> VerdictStyle {
    Verdict::from_label(label)
        .unwrap_or(Verdict::NormalTraffic)
        .style()
}

/// Scalar model outputs render to 4 decimal places everywhere.
pub fn format_scalar(value: f64) -> String {
    format!("{value:.4}")
}
