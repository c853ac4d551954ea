//! Tauri invoke command handlers.
//!
//! Each sub-module groups related commands by domain.  All public functions
//! in these modules are annotated with `#[tauri::command]` and registered
//! in the [`tauri::Builder`] invoke handler in `lib.rs`.

pub mod admin;
pub mod ads;
pub mod catalog;
pub mod profile;
pub mod rewards;
