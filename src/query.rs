use crate::types::alert::{Alert, AlertFilter};

/// Apply the overview filters and triage ordering to an alert slice.
///
/// Active criteria combine with AND; `None` (or a blank search string) is a
/// no-op. The result is ordered by descending risk score, ties broken by
/// most recent detection timestamp first.
pub fn select_alerts(alerts: &[Alert], filter: &AlertFilter) -> Vec<Alert> {
    let mut selected: Vec<Alert> = alerts
        .iter()
        .filter(|a| matches(filter, a))
        .cloned()
        .collect();

    selected.sort_by(|a, b| {
        b.risk_score
            .cmp(&a.risk_score)
            .then_with(|| b.detected_at.cmp(&a.detected_at))
    });
    selected
}

fn matches(filter: &AlertFilter, alert: &Alert) -> bool {
    if let Some(severity) = filter.severity {
        if alert.severity != severity {
            return false;
        }
    }
    if let Some(status) = filter.status {
        if alert.status != status {
            return false;
        }
    }
    if let Some(search) = filter.search.as_deref() {
        let needle = search.trim().to_lowercase();
        if !needle.is_empty() && !alert.title.to_lowercase().contains(&needle) {
            return false;
        }
    }
    if let Some(account) = filter.cloud_account.as_deref() {
        if alert.cloud_account != account {
            return false;
        }
    }
    true
}
