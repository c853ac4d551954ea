//! # layar-shared
//!
//! Entity model and pure mutation services for the Layar client.
//!
//! Every service here is a pure function of (current slice value, input)
//! returning the new slice value; no I/O happens in this crate.  The
//! client crate applies the result and persists it through `layar-store`
//! as one user-visible action.

pub mod ads;
pub mod auth;
pub mod catalog;
pub mod constants;
pub mod ledger;
pub mod models;
pub mod rewards;

pub use models::*;
