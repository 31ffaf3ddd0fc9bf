use std::collections::HashSet;

use crate::types::alert::Alert;

/// Read-only alert collection, loaded once at startup and managed as Tauri
/// state. Order is the fixture's authored order; callers that need the
/// triage ordering go through `query::select_alerts`.
#[derive(Debug)]
pub struct AlertStore {
    alerts: Vec<Alert>,
}

impl AlertStore {
    /// Parse and validate a JSON array of alerts. Rejects duplicate ids and
    /// out-of-range risk scores; unknown severity/status values are already
    /// rejected by the closed enums during deserialization.
    pub fn from_json(raw: &str) -> Result<Self, String> {
        let alerts: Vec<Alert> =
            serde_json::from_str(raw).map_err(|e| format!("Invalid alert fixture: {}", e))?;

        let mut seen = HashSet::new();
        for alert in &alerts {
            if !seen.insert(alert.id.as_str()) {
                return Err(format!("Duplicate alert id: {}", alert.id));
            }
            if alert.risk_score > 100 {
                return Err(format!(
                    "Risk score out of range for {}: {}",
                    alert.id, alert.risk_score
                ));
            }
        }

        Ok(Self { alerts })
    }

    /// Load the embedded fixture dataset.
    pub fn load_fixture() -> Result<Self, String> {
        Self::from_json(include_str!("../fixtures/alerts.json"))
    }

    pub fn get_all(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Alert> {
        self.alerts.iter().find(|a| a.id == id)
    }

    /// Distinct cloud account labels, sorted, for the overview filter
    /// dropdown.
    pub fn accounts(&self) -> Vec<String> {
        let mut accounts: Vec<String> = self
            .alerts
            .iter()
            .map(|a| a.cloud_account.clone())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        accounts.sort();
        accounts
    }
}
