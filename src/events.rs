use serde::Serialize;
use tauri::{AppHandle, Emitter, Runtime};

/// Event names as constants — matches the frontend IPC listener names
pub mod event_names {
    pub const RESOLUTION_SUBMITTED: &str = "resolution:submitted";
}

pub fn emit_event<R: Runtime, T: Serialize + Clone>(
    app: &AppHandle<R>,
    event: &str,
    payload: T,
) -> Result<(), String> {
    app.emit(event, payload).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::event_names::*;

    #[test]
    fn event_names_match_ipc_contract() {
        assert_eq!(RESOLUTION_SUBMITTED, "resolution:submitted");
    }

    #[test]
    fn emit_event_compiles_with_typed_payloads() {
        // This test verifies the function signature compiles with our types.
        // Actual emission requires a running Tauri app, tested in integration.
        use crate::types::resolution::{ResolutionAck, ResolutionStatus};
        let ack = ResolutionAck {
            alert_id: "AL-2024-001".to_string(),
            status: ResolutionStatus::Resolved,
            submitted_at: 1717243500000,
        };
        fn _assert_serialize_clone<T: serde::Serialize + Clone>(_: &T) {}
        _assert_serialize_clone(&ack);
    }
}
