use crate::query;
use crate::store::AlertStore;
use crate::types::alert::{Alert, AlertFilter};

/// Direct store access for testing (no Tauri State)
pub fn alerts_list_filtered(store: &AlertStore, filter: &AlertFilter) -> Vec<Alert> {
    query::select_alerts(store.get_all(), filter)
}

pub fn alerts_get_by_id(store: &AlertStore, alert_id: &str) -> Option<Alert> {
    store.get_by_id(alert_id).cloned()
}

// Tauri command wrappers — these use State<AlertStore>

/// Overview listing: filtered, risk-sorted. An empty result is an empty
/// array; the frontend renders the "no matches" state from it.
#[tauri::command]
pub fn alerts_list(
    store: tauri::State<'_, AlertStore>,
    filter: Option<AlertFilter>,
) -> Vec<Alert> {
    alerts_list_filtered(&store, &filter.unwrap_or_default())
}

/// Detail/resolution lookup. `None` means not found — the frontend renders
/// its not-found view with a link back to the overview.
#[tauri::command]
pub fn alerts_get(store: tauri::State<'_, AlertStore>, alert_id: String) -> Option<Alert> {
    alerts_get_by_id(&store, &alert_id)
}

/// Distinct cloud account labels for the overview filter dropdown.
#[tauri::command]
pub fn alerts_accounts(store: tauri::State<'_, AlertStore>) -> Vec<String> {
    store.accounts()
}
