//! # layar-store
//!
//! Local durable storage for the Layar application, backed by SQLite.
//!
//! State is held as three independently-persisted JSON slices (user
//! profile, drama catalog, ad configuration), each stored wholesale under
//! a named key and overwritten on every accepted mutation.  The crate
//! exposes a synchronous [`SliceStore`] handle that wraps a
//! `rusqlite::Connection` and provides typed load/save helpers for every
//! slice.

pub mod database;
pub mod migrations;
pub mod slices;

mod error;

pub use database::SliceStore;
pub use error::StoreError;
pub use slices::{ADS_SLICE, CATALOG_SLICE, USER_SLICE};
