// Alert feed: the standing alerts shown on the alerts page and their filters
use super::error::GeneratorError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Active,
    Acknowledged,
    Resolved,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub id: u32,
    pub title: &'static str,
    pub message: &'static str,
    pub severity: AlertSeverity,
    pub time: &'static str,
    pub status: AlertStatus,
    pub location: &'static str,
    pub asset_id: &'static str,
    pub recommendations: &'static [&'static str],
    /// Industry slug; `None` means the alert is shown for every industry.
    pub industry: Option<&'static str>,
}

impl Alert {
    pub fn applies_to(&self, industry_slug: &str) -> bool {
        self.industry.is_none_or(|slug| slug == industry_slug)
    }
}

/// Tabs of the alerts page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertFilter {
    #[default]
    All,
    Status(AlertStatus),
    Severity(AlertSeverity),
}

impl AlertFilter {
    pub fn matches(&self, alert: &Alert) -> bool {
        match self {
            AlertFilter::All => true,
            AlertFilter::Status(status) => alert.status == *status,
            AlertFilter::Severity(severity) => alert.severity == *severity,
        }
    }
}

impl FromStr for AlertFilter {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(AlertFilter::All),
            "active" => Ok(AlertFilter::Status(AlertStatus::Active)),
            "acknowledged" => Ok(AlertFilter::Status(AlertStatus::Acknowledged)),
            "resolved" => Ok(AlertFilter::Status(AlertStatus::Resolved)),
            "critical" => Ok(AlertFilter::Severity(AlertSeverity::Critical)),
            "high" => Ok(AlertFilter::Severity(AlertSeverity::High)),
            other => Err(GeneratorError::InvalidArgument(format!(
                "unknown alert filter '{}' (expected all, active, acknowledged, resolved, critical or high)",
                other
            ))),
        }
    }
}

impl fmt::Display for AlertFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AlertFilter::All => "all",
            AlertFilter::Status(AlertStatus::Active) => "active",
            AlertFilter::Status(AlertStatus::Acknowledged) => "acknowledged",
            AlertFilter::Status(AlertStatus::Resolved) => "resolved",
            AlertFilter::Severity(AlertSeverity::Low) => "low",
            AlertFilter::Severity(AlertSeverity::Medium) => "medium",
            AlertFilter::Severity(AlertSeverity::High) => "high",
            AlertFilter::Severity(AlertSeverity::Critical) => "critical",
        };
        write!(f, "{}", name)
    }
}

/// Filtered alerts plus the per-status totals of the unfiltered feed.
#[derive(Debug, Clone)]
pub struct AlertFeed {
    pub alerts: Vec<&'static Alert>,
    pub active: usize,
    pub acknowledged: usize,
    pub resolved: usize,
}

impl AlertFeed {
    pub fn build(scoped: Vec<&'static Alert>, filter: AlertFilter) -> Self {
        let count = |status| scoped.iter().filter(|a| a.status == status).count();
        Self {
            active: count(AlertStatus::Active),
            acknowledged: count(AlertStatus::Acknowledged),
            resolved: count(AlertStatus::Resolved),
            alerts: scoped.iter().copied().filter(|a| filter.matches(a)).collect(),
        }
    }
}

pub static ALERTS: &[Alert] = &[
    Alert {
        id: 1,
        title: "High Pressure Alert",
        message: "Pressure exceeding threshold in Pipeline Section A",
        severity: AlertSeverity::High,
        time: "10 minutes ago",
        status: AlertStatus::Active,
        location: "Pipeline Section A",
        asset_id: "PIPE-A-123",
        recommendations: &[
            "Reduce flow rate by 15%",
            "Check pressure relief valve",
            "Inspect for blockages",
        ],
        industry: None,
    },
    Alert {
        id: 2,
        title: "Temperature Warning",
        message: "Compressor temperature rising above normal operating range",
        severity: AlertSeverity::Medium,
        time: "45 minutes ago",
        status: AlertStatus::Active,
        location: "Compressor Station 2",
        asset_id: "COMP-2-456",
        recommendations: &[
            "Check cooling system",
            "Inspect lubrication system",
            "Schedule maintenance if persists",
        ],
        industry: None,
    },
    Alert {
        id: 3,
        title: "Pump Vibration",
        message: "Abnormal vibration detected in Pump Unit #5",
        severity: AlertSeverity::Critical,
        time: "2 hours ago",
        status: AlertStatus::Acknowledged,
        location: "Pump Station 3",
        asset_id: "PUMP-5-789",
        recommendations: &[
            "Shut down pump immediately",
            "Inspect bearings and shaft alignment",
            "Prepare replacement parts",
        ],
        industry: None,
    },
    Alert {
        id: 4,
        title: "Flow Rate Deviation",
        message: "Flow rate below expected threshold in Transfer Line C",
        severity: AlertSeverity::Low,
        time: "3 hours ago",
        status: AlertStatus::Resolved,
        location: "Transfer Line C",
        asset_id: "LINE-C-012",
        recommendations: &[
            "Check valve positions",
            "Inspect for partial blockage",
            "Verify sensor calibration",
        ],
        industry: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_parsing() {
        assert_eq!("all".parse::<AlertFilter>().unwrap(), AlertFilter::All);
        assert_eq!(
            "Resolved".parse::<AlertFilter>().unwrap(),
            AlertFilter::Status(AlertStatus::Resolved)
        );
        assert_eq!(
            "critical".parse::<AlertFilter>().unwrap(),
            AlertFilter::Severity(AlertSeverity::Critical)
        );
        assert!(matches!(
            "medium".parse::<AlertFilter>(),
            Err(GeneratorError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_feed_counts_ignore_the_filter() {
        let feed = AlertFeed::build(ALERTS.iter().collect(), AlertFilter::Status(AlertStatus::Active));
        assert_eq!(feed.alerts.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!((feed.active, feed.acknowledged, feed.resolved), (2, 1, 1));
    }

    #[test]
    fn test_untagged_alerts_apply_everywhere() {
        let tagged = Alert {
            industry: Some("construction"),
            ..ALERTS[0].clone()
        };
        assert!(ALERTS[0].applies_to("oil-gas"));
        assert!(tagged.applies_to("construction"));
        assert!(!tagged.applies_to("oil-gas"));
    }
}
