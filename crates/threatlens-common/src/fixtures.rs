//! Dashboard fixture data — stat cards, chart series, and the recent-alerts
//! table. The upstream model API exposes no dashboard endpoints, so these are
//! constructed datasets injected into the web state at startup rather than
//! ambient globals; tests substitute their own.

use serde::{Deserialize, Serialize};

/// One headline metric card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub change: String,
    pub trend: Trend,
}

/// Direction of the change indicator on a stat card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Increase,
    Decrease,
}

impl Trend {
    /// Rising threat counts are bad news, falling ones good.
    pub fn css_class(self) -> &'static str {
        match self {
            Trend::Increase => "trend-up",
            Trend::Decrease => "trend-down",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Trend::Increase => "↑",
            Trend::Decrease => "↓",
        }
    }
}

/// One point on the threats-over-time chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatPoint {
    pub label: String,
    pub threats: u64,
}

/// One slice of the threat-breakdown chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatSlice {
    pub name: String,
    pub value: u64,
    pub fill: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Critical => "severity-critical",
            Severity::High => "severity-high",
            Severity::Medium => "severity-medium",
            Severity::Low => "severity-low",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertStatus {
    Resolved,
    Unresolved,
}

impl AlertStatus {
    pub fn css_class(self) -> &'static str {
        match self {
            AlertStatus::Resolved => "status-resolved",
            AlertStatus::Unresolved => "status-unresolved",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AlertStatus::Resolved => "Resolved",
            AlertStatus::Unresolved => "Unresolved",
        }
    }
}

/// One row of the recent-alerts table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub system: String,
    pub severity: Severity,
    pub time: String,
    pub status: AlertStatus,
}

/// Everything the dashboard page renders besides the two live panels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardFixtures {
    pub stats: Vec<StatCard>,
    pub threat_series: Vec<ThreatPoint>,
    pub threat_types: Vec<ThreatSlice>,
    pub recent_alerts: Vec<Alert>,
}

impl DashboardFixtures {
    /// The demonstration dataset shipped with the dashboard.
    pub fn demo() -> Self {
        let stats = vec![
            stat("Total Threats", "1,420", "+12.5%", Trend::Increase),
            stat("High-Risk Alerts", "89", "-2.8%", Trend::Decrease),
            stat("Systems Affected", "23", "+5.2%", Trend::Increase),
            stat("Threats Logged for Audit", "1,280", "+15.0%", Trend::Increase),
        ];

        let threat_series = [
            ("Jan", 4000),
            ("Feb", 3000),
            ("Mar", 2000),
            ("Apr", 2780),
            ("May", 1890),
            ("Jun", 2390),
            ("Jul", 3490),
            ("Aug", 3600),
        ]
        .into_iter()
        .map(|(label, threats)| ThreatPoint {
            label: label.to_string(),
            threats,
        })
        .collect();

        let threat_types = [
            ("Malware", 400, "#8884d8"),
            ("Phishing", 300, "#82ca9d"),
            ("DDoS", 300, "#ffc658"),
            ("SQL Injection", 200, "#ff8042"),
        ]
        .into_iter()
        .map(|(name, value, fill)| ThreatSlice {
            name: name.to_string(),
            value,
            fill: fill.to_string(),
        })
        .collect();

        let recent_alerts = vec![
            alert("ALERT-001", "auth-service-prod", Severity::Critical, "2 min ago", AlertStatus::Unresolved),
            alert("ALERT-002", "payment-gateway-v2", Severity::High, "15 min ago", AlertStatus::Unresolved),
            alert("ALERT-003", "user-database-replica", Severity::Medium, "1 hr ago", AlertStatus::Resolved),
            alert("ALERT-004", "cdn-edge-node-eu", Severity::High, "3 hr ago", AlertStatus::Unresolved),
            alert("ALERT-005", "api-main-cluster", Severity::Low, "5 hr ago", AlertStatus::Resolved),
        ];

        Self {
            stats,
            threat_series,
            threat_types,
            recent_alerts,
        }
    }

    /// An empty dataset, useful as a test baseline.
    pub fn empty() -> Self {
        Self {
            stats: Vec::new(),
            threat_series: Vec::new(),
            threat_types: Vec::new(),
            recent_alerts: Vec::new(),
        }
    }
}

fn stat(title: &str, value: &str, change: &str, trend: Trend) -> StatCard {
    StatCard {
        title: title.to_string(),
        value: value.to_string(),
        change: change.to_string(),
        trend,
    }
}

fn alert(id: &str, system: &str, severity: Severity, time: &str, status: AlertStatus) -> Alert {
    Alert {
        id: id.to_string(),
        system: system.to_string(),
        severity,
        time: time.to_string(),
        status,
    }
}
