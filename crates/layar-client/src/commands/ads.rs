use std::sync::{Arc, Mutex};

use tauri::State;

use layar_shared::models::AdConfig;

use crate::state::AppState;

/// Both ad zone records, for the render layer to inject.
#[tauri::command]
pub fn get_ads(state: State<'_, Arc<Mutex<AppState>>>) -> Result<Vec<AdConfig>, String> {
    let guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    Ok(guard.store.load_ads())
}
