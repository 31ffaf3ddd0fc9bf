use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionStatus {
    Resolved,
    InProgress,
    FalsePositive,
}

/// One audit row in the `resolutions` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionRecord {
    pub id: i64,
    pub alert_id: String,
    pub status: ResolutionStatus,
    pub notes: Option<String>,
    /// Epoch milliseconds.
    pub submitted_at: i64,
}

/// Returned to the frontend on a successful submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionAck {
    pub alert_id: String,
    pub status: ResolutionStatus,
    pub submitted_at: i64,
}
