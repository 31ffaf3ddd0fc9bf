use tracing::info;

use crate::db::DbPool;
use crate::events::{self, event_names};
use crate::store::AlertStore;
use crate::types::resolution::{ResolutionAck, ResolutionRecord, ResolutionStatus};

/// Validate and record a resolution decision. Direct DB access for testing
/// (no Tauri State).
///
/// A submission without a selected status is blocked before any write; an
/// unknown alert id is rejected the same way. On success one audit row is
/// inserted and an acknowledgement returned.
pub fn resolution_submit_db(
    pool: &DbPool,
    store: &AlertStore,
    alert_id: &str,
    status: Option<ResolutionStatus>,
    notes: &str,
) -> Result<ResolutionAck, String> {
    let status = status.ok_or("Please select a resolution status to proceed.")?;
    if store.get_by_id(alert_id).is_none() {
        return Err(format!("Alert not found: {}", alert_id));
    }

    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_err(|e| e.to_string())?
        .as_millis() as i64;

    let status_str = serde_json::to_value(status)
        .map_err(|e| e.to_string())?
        .as_str()
        .unwrap_or("resolved")
        .to_string();

    let notes = notes.trim();
    let conn = pool.get().map_err(|e| e.to_string())?;
    conn.execute(
        "INSERT INTO resolutions (alert_id, status, notes, submitted_at)
         VALUES (?1, ?2, ?3, ?4)",
        rusqlite::params![
            alert_id,
            status_str,
            if notes.is_empty() { None } else { Some(notes) },
            now,
        ],
    )
    .map_err(|e| e.to_string())?;

    info!(alert_id = alert_id, status = %status_str, "resolution recorded");

    Ok(ResolutionAck {
        alert_id: alert_id.to_string(),
        status,
        submitted_at: now,
    })
}

/// Audit history for one alert, newest first.
pub fn resolution_list_db(pool: &DbPool, alert_id: &str) -> Result<Vec<ResolutionRecord>, String> {
    let conn = pool.get().map_err(|e| e.to_string())?;
    let mut stmt = conn
        .prepare(
            "SELECT id, alert_id, status, notes, submitted_at FROM resolutions
             WHERE alert_id = ?1 ORDER BY submitted_at DESC, id DESC",
        )
        .map_err(|e| e.to_string())?;

    let rows = stmt
        .query_map([alert_id], |row| {
            let status_str: String = row.get(2)?;
            Ok(ResolutionRecord {
                id: row.get(0)?,
                alert_id: row.get(1)?,
                status: serde_json::from_str(&format!("\"{}\"", status_str))
                    .unwrap_or(ResolutionStatus::Resolved),
                notes: row.get(3)?,
                submitted_at: row.get(4)?,
            })
        })
        .map_err(|e| e.to_string())?;

    let mut results = Vec::new();
    for row in rows {
        results.push(row.map_err(|e| e.to_string())?);
    }
    Ok(results)
}

// ---------------------------------------------------------------------------
// Tauri command wrappers
// ---------------------------------------------------------------------------

/// Submit a resolution decision for an alert.
///
/// This is the persistence collaborator behind the resolution form: the
/// frontend collects (status, notes), awaits this call, and navigates back
/// to the overview only on success. On failure it keeps the form state and
/// surfaces the error string. Navigating away mid-flight simply drops the
/// pending promise; no view state lives on this side.
#[tauri::command]
pub async fn resolution_submit(
    app: tauri::AppHandle,
    pool: tauri::State<'_, DbPool>,
    store: tauri::State<'_, AlertStore>,
    alert_id: String,
    status: Option<ResolutionStatus>,
    notes: String,
) -> Result<ResolutionAck, String> {
    let ack = resolution_submit_db(&pool, &store, &alert_id, status, &notes)?;
    let _ = events::emit_event(&app, event_names::RESOLUTION_SUBMITTED, ack.clone());
    Ok(ack)
}

/// List the recorded resolution decisions for an alert, newest first.
#[tauri::command]
pub fn resolution_list(
    pool: tauri::State<'_, DbPool>,
    alert_id: String,
) -> Result<Vec<ResolutionRecord>, String> {
    resolution_list_db(&pool, &alert_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::migrations;

    fn test_pool() -> DbPool {
        let dir = tempfile::tempdir().unwrap();
        let pool = db::create_pool(&dir.path().join("test.sqlite")).unwrap();
        db::init_db(&pool).unwrap();
        migrations::run_pending(&pool).unwrap();
        pool
    }

    fn test_store() -> AlertStore {
        AlertStore::load_fixture().unwrap()
    }

    #[test]
    fn submit_records_an_audit_row() {
        let pool = test_pool();
        let store = test_store();

        let ack = resolution_submit_db(
            &pool,
            &store,
            "AL-2024-001",
            Some(ResolutionStatus::Resolved),
            "Blocked public access and tightened the policy.",
        )
        .unwrap();
        assert_eq!(ack.alert_id, "AL-2024-001");
        assert!(ack.submitted_at > 0);

        let records = resolution_list_db(&pool, "AL-2024-001").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, ResolutionStatus::Resolved);
        assert_eq!(
            records[0].notes.as_deref(),
            Some("Blocked public access and tightened the policy.")
        );
    }

    #[test]
    fn submit_without_status_is_blocked() {
        let pool = test_pool();
        let store = test_store();

        let err = resolution_submit_db(&pool, &store, "AL-2024-001", None, "some notes")
            .unwrap_err();
        assert!(err.contains("select a resolution status"));

        // Nothing was written.
        let records = resolution_list_db(&pool, "AL-2024-001").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn submit_for_unknown_alert_is_rejected() {
        let pool = test_pool();
        let store = test_store();

        let err = resolution_submit_db(
            &pool,
            &store,
            "AL-0000-000",
            Some(ResolutionStatus::FalsePositive),
            "",
        )
        .unwrap_err();
        assert!(err.contains("Alert not found"));
    }

    #[test]
    fn blank_notes_stored_as_null() {
        let pool = test_pool();
        let store = test_store();

        resolution_submit_db(&pool, &store, "AL-2024-003", Some(ResolutionStatus::InProgress), "   ")
            .unwrap();
        let records = resolution_list_db(&pool, "AL-2024-003").unwrap();
        assert_eq!(records[0].notes, None);
    }

    #[test]
    fn list_returns_newest_first() {
        let pool = test_pool();
        let store = test_store();

        resolution_submit_db(&pool, &store, "AL-2024-002", Some(ResolutionStatus::InProgress), "first")
            .unwrap();
        resolution_submit_db(&pool, &store, "AL-2024-002", Some(ResolutionStatus::Resolved), "second")
            .unwrap();

        let records = resolution_list_db(&pool, "AL-2024-002").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].notes.as_deref(), Some("second"));
        assert_eq!(records[1].notes.as_deref(), Some("first"));
    }

    #[test]
    fn list_is_scoped_to_the_alert() {
        let pool = test_pool();
        let store = test_store();

        resolution_submit_db(&pool, &store, "AL-2024-001", Some(ResolutionStatus::Resolved), "")
            .unwrap();
        resolution_submit_db(&pool, &store, "AL-2024-002", Some(ResolutionStatus::Resolved), "")
            .unwrap();

        let records = resolution_list_db(&pool, "AL-2024-001").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].alert_id, "AL-2024-001");
    }
}
