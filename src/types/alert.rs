use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    Open,
    InProgress,
    Resolved,
    FalsePositive,
}

/// Timeline event classification used by the detail view to pick an icon.
/// `Generic` is the explicit catch-all; events with no category fall back
/// to it via `#[serde(default)]` on the field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    ConfigChange,
    UserAction,
    SystemEvent,
    AccessAttempt,
    #[default]
    Generic,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub description: String,
    /// Human-readable origin label, e.g. "CloudTrail" or "GuardDuty".
    pub source: String,
    #[serde(default)]
    pub category: EventCategory,
    pub actor: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// ARN or provider-native identifier.
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub region: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    /// 0-100, validated when the store is loaded.
    pub risk_score: u8,
    pub service: String,
    pub cloud_account: String,
    pub status: AlertStatus,
    pub detected_at: DateTime<Utc>,
    pub assignee: Option<String>,
    /// Chronological, oldest first. Ordering is the fixture author's
    /// responsibility; the store does not re-sort.
    pub timeline: Vec<TimelineEvent>,
    pub impacted_resources: Vec<Resource>,
    pub recommended_actions: Vec<String>,
}

/// Overview filter criteria. `None` (or a blank search string) means the
/// corresponding filter is inactive; active filters combine with AND.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlertFilter {
    pub severity: Option<Severity>,
    pub status: Option<AlertStatus>,
    pub search: Option<String>,
    pub cloud_account: Option<String>,
}
