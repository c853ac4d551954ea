use std::sync::{Arc, Mutex};

use tauri::State;
use tracing::{info, warn};

use layar_shared::ads;
use layar_shared::ledger;
use layar_shared::models::{AdConfig, AdPosition, UserProfile};

use crate::state::AppState;

fn require_admin(state: &AppState) -> Result<(), String> {
    if state.is_admin {
        Ok(())
    } else {
        Err("Admin session required".into())
    }
}

/// Open an admin session for this process.
///
/// Bad credentials are rejected with no state change; a granted session
/// lives only in memory and dies with the process.
#[tauri::command]
pub fn admin_login(
    state: State<'_, Arc<Mutex<AppState>>>,
    username: String,
    password: String,
) -> Result<(), String> {
    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;

    if !guard.auth.check_credentials(&username, &password) {
        warn!(user = %username, "Rejected admin login");
        return Err("Invalid admin credentials".into());
    }

    guard.is_admin = true;
    info!("Admin session opened");
    Ok(())
}

/// Close the admin session.
#[tauri::command]
pub fn admin_logout(state: State<'_, Arc<Mutex<AppState>>>) -> Result<(), String> {
    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    guard.is_admin = false;
    info!("Admin session closed");
    Ok(())
}

/// Whether this session has passed the admin gate.
#[tauri::command]
pub fn admin_session(state: State<'_, Arc<Mutex<AppState>>>) -> Result<bool, String> {
    let guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    Ok(guard.is_admin)
}

/// Add `amount` to the coin balance (positive or negative, no floor
/// check) and record the matching deposit entry.  The numeric-input
/// prompt and its validation live in the UI; a cancelled prompt never
/// reaches this command.
#[tauri::command]
pub fn adjust_balance(
    state: State<'_, Arc<Mutex<AppState>>>,
    amount: i64,
) -> Result<UserProfile, String> {
    let guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    require_admin(&guard)?;

    let mut profile = guard.store.load_profile();
    let tx = ledger::admin_adjust(&mut profile, amount);
    guard
        .store
        .save_profile(&profile)
        .map_err(|e| format!("Failed to save profile: {e}"))?;

    info!(amount = tx.amount, balance = profile.coins, "Balance adjusted");
    Ok(profile)
}

/// Replace the ad script for one zone and recompute its active flag.
#[tauri::command]
pub fn update_ad_script(
    state: State<'_, Arc<Mutex<AppState>>>,
    position: AdPosition,
    code: String,
) -> Result<AdConfig, String> {
    let guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    require_admin(&guard)?;

    let mut zones = guard.store.load_ads();
    let updated = ads::update_script(&mut zones, position, code)
        .ok_or_else(|| "Unknown ad zone".to_string())?;
    guard
        .store
        .save_ads(&zones)
        .map_err(|e| format!("Failed to save ad configuration: {e}"))?;

    info!(position = ?updated.position, active = updated.is_active, "Ad script updated");
    Ok(updated)
}
