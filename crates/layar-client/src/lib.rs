pub mod commands;
pub mod enrichment;
pub mod state;

use std::sync::{Arc, Mutex};

use tracing_subscriber::{fmt, EnvFilter};

use layar_store::SliceStore;

use crate::state::AppState;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("layar_client_lib=debug,layar_store=info,warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    tracing::info!("Starting Layar desktop client");

    let store = SliceStore::new().expect("Failed to open slice store");
    if let Err(e) = store.ensure_seeded() {
        tracing::warn!(error = %e, "Failed to seed first-run slices");
    }

    let app_state = Arc::new(Mutex::new(AppState::new(store)));
    let enrichment_state = app_state.clone();

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .manage(app_state)
        .setup(move |_app| {
            // One-shot profile enrichment; failures are logged and ignored.
            tauri::async_runtime::spawn(enrichment::detect_public_ip(enrichment_state));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::catalog::list_dramas,
            commands::catalog::upload_drama,
            commands::catalog::delete_drama,
            commands::rewards::claim_daily_reward,
            commands::profile::get_profile,
            commands::profile::rename_profile,
            commands::profile::toggle_favorite,
            commands::profile::record_watch,
            commands::profile::list_transactions,
            commands::ads::get_ads,
            commands::admin::admin_login,
            commands::admin::admin_logout,
            commands::admin::admin_session,
            commands::admin::adjust_balance,
            commands::admin::update_ad_script,
        ])
        .run(tauri::generate_context!())
        .expect("Failed to run Tauri application");
}
