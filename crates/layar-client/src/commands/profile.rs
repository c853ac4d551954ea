use std::sync::{Arc, Mutex};

use tauri::State;
use tracing::info;
use uuid::Uuid;

use layar_shared::models::{Transaction, UserProfile};

use crate::state::AppState;

/// The current user profile.
#[tauri::command]
pub fn get_profile(state: State<'_, Arc<Mutex<AppState>>>) -> Result<UserProfile, String> {
    let guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    Ok(guard.store.load_profile())
}

/// Update the display name.  Blank input is rejected with no state change.
#[tauri::command]
pub fn rename_profile(
    state: State<'_, Arc<Mutex<AppState>>>,
    name: String,
) -> Result<UserProfile, String> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err("Name cannot be empty".into());
    }

    let guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;

    let mut profile = guard.store.load_profile();
    profile.name = name;
    guard
        .store
        .save_profile(&profile)
        .map_err(|e| format!("Failed to save profile: {e}"))?;

    info!(name = %profile.name, "Display name updated");
    Ok(profile)
}

/// Toggle a drama in the favorite set.  Returns the new membership.
#[tauri::command]
pub fn toggle_favorite(
    state: State<'_, Arc<Mutex<AppState>>>,
    drama_id: Uuid,
) -> Result<bool, String> {
    let guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;

    let mut profile = guard.store.load_profile();
    let now_favorite = profile.toggle_favorite(drama_id);
    guard
        .store
        .save_profile(&profile)
        .map_err(|e| format!("Failed to save profile: {e}"))?;

    Ok(now_favorite)
}

/// Append a watched drama to the history.
#[tauri::command]
pub fn record_watch(
    state: State<'_, Arc<Mutex<AppState>>>,
    drama_id: Uuid,
) -> Result<(), String> {
    let guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;

    let mut profile = guard.store.load_profile();
    profile.record_watch(drama_id);
    guard
        .store
        .save_profile(&profile)
        .map_err(|e| format!("Failed to save profile: {e}"))?;

    Ok(())
}

/// Ledger entries, newest first.
#[tauri::command]
pub fn list_transactions(
    state: State<'_, Arc<Mutex<AppState>>>,
) -> Result<Vec<Transaction>, String> {
    let guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    Ok(guard.store.load_profile().transactions)
}
