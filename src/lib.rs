pub mod commands;
pub mod db;
pub mod events;
pub mod migrations;
pub mod query;
pub mod routes;
pub mod store;
pub mod types;

use tracing_subscriber::EnvFilter;

/// Initialize structured logging with tracing.
/// Respects RUST_LOG env var; defaults to `info` level for the cloudtriage crate.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("cloudtriage_lib=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    init_tracing();

    // The alert dataset is fixed for the life of the process; a bad fixture
    // is a packaging error, so fail fast.
    let store = store::AlertStore::load_fixture().expect("Failed to load alert fixture");

    let data_dir = db::cloudtriage_data_dir();
    let db_path = data_dir.join("state").join("cloudtriage.sqlite");
    let pool = db::create_pool(&db_path).expect("Failed to create database pool");
    db::init_db(&pool).expect("Failed to initialize database");
    migrations::run_pending(&pool).expect("Failed to run migrations");

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_notification::init())
        .manage(store)
        .manage(pool)
        .invoke_handler(tauri::generate_handler![
            commands::alerts::alerts_list,
            commands::alerts::alerts_get,
            commands::alerts::alerts_accounts,
            commands::resolution::resolution_submit,
            commands::resolution::resolution_list,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
