use std::sync::{Arc, Mutex};

use tauri::State;
use tracing::info;
use uuid::Uuid;

use layar_shared::catalog::{self, DramaUpload};
use layar_shared::models::Drama;

use crate::state::AppState;

/// List the catalog, most-recently-added first.
#[tauri::command]
pub fn list_dramas(state: State<'_, Arc<Mutex<AppState>>>) -> Result<Vec<Drama>, String> {
    let guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    Ok(guard.store.load_catalog())
}

/// Create a drama from the upload form and persist the catalog.
///
/// Omitted fields get their defaults; the author is the current display
/// name.
#[tauri::command]
pub fn upload_drama(
    state: State<'_, Arc<Mutex<AppState>>>,
    fields: DramaUpload,
) -> Result<Drama, String> {
    let guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;

    let author = guard.store.load_profile().name;
    let mut dramas = guard.store.load_catalog();
    let drama = catalog::upload(&mut dramas, fields, &author);

    guard
        .store
        .save_catalog(&dramas)
        .map_err(|e| format!("Failed to save catalog: {e}"))?;

    info!(id = %drama.id, title = %drama.title, "Drama uploaded");
    Ok(drama)
}

/// Delete a drama by id.
///
/// The permanent-delete confirmation dialog happens in the UI before this
/// command is invoked; an unknown id is a silent no-op.  Returns whether
/// an entry was removed.
#[tauri::command]
pub fn delete_drama(state: State<'_, Arc<Mutex<AppState>>>, id: Uuid) -> Result<bool, String> {
    let guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;

    let mut dramas = guard.store.load_catalog();
    let removed = catalog::remove(&mut dramas, id);

    if removed {
        guard
            .store
            .save_catalog(&dramas)
            .map_err(|e| format!("Failed to save catalog: {e}"))?;
        info!(%id, "Drama deleted");
    }

    Ok(removed)
}
