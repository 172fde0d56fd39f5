use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub title: &'static str,
    pub time: &'static str,
    pub severity: Severity,
}

pub const ALERTS: [Alert; 3] = [
    Alert {
        title: "High-Risk Collision Detected",
        time: "2 minutes ago",
        severity: Severity::High,
    },
    Alert {
        title: "New Debris Field Identified",
        time: "15 minutes ago",
        severity: Severity::Medium,
    },
    Alert {
        title: "Satellite Path Adjustment Required",
        time: "1 hour ago",
        severity: Severity::Low,
    },
];
