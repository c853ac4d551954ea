//! Domain model structs persisted as JSON slices in the local store.
//!
//! Every struct derives `Serialize` and `Deserialize` so it can be handed
//! directly to the UI layer over IPC.  Field names serialize as camelCase
//! to match the frontend shapes, and persisted fields carry
//! `#[serde(default)]` so a snapshot written by an older build loads with
//! per-field defaults instead of failing outright.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{DEFAULT_DISPLAY_NAME, WELCOME_BONUS_COINS, WELCOME_BONUS_LABEL};

// ---------------------------------------------------------------------------
// User profile
// ---------------------------------------------------------------------------

/// The sole wallet/identity record for the local session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Stable identifier, generated once at first run.
    pub id: Uuid,
    /// Mutable display name.
    pub name: String,
    /// Coin balance.  Only the ledger-coupled services and the admin
    /// authority path may change it; the admin path alone can drive it
    /// negative (no floor check there).
    pub coins: i64,
    #[serde(default)]
    pub is_vip: bool,
    /// Advisory metadata only; admin capability is the session gate, not
    /// this field.
    #[serde(default)]
    pub role: Role,
    /// Watched drama ids, append-only.
    #[serde(default)]
    pub history: Vec<Uuid>,
    /// Favorited drama ids.  A set, so membership toggles cannot introduce
    /// duplicates.
    #[serde(default)]
    pub favorites: BTreeSet<Uuid>,
    /// Ledger entries, newest first, capped at
    /// [`LEDGER_CAP`](crate::constants::LEDGER_CAP).
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    /// Calendar date of the last daily-reward claim.  `None` means never
    /// claimed.
    #[serde(default)]
    pub last_check_in: Option<NaiveDate>,
    /// Public address filled in once by the startup enrichment task.
    /// Absence is a valid state.
    #[serde(default)]
    pub ip_address: Option<String>,
}

impl UserProfile {
    /// Build the first-run profile: welcome balance plus the matching
    /// ledger entry.
    pub fn seeded() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: DEFAULT_DISPLAY_NAME.to_string(),
            coins: WELCOME_BONUS_COINS,
            is_vip: false,
            role: Role::User,
            history: Vec::new(),
            favorites: BTreeSet::new(),
            transactions: vec![Transaction::new(
                TransactionKind::Reward,
                WELCOME_BONUS_LABEL,
                WELCOME_BONUS_COINS,
            )],
            last_check_in: None,
            ip_address: None,
        }
    }

    /// Toggle membership of `drama_id` in the favorite set.  Returns
    /// `true` when the drama is a favorite afterwards.
    pub fn toggle_favorite(&mut self, drama_id: Uuid) -> bool {
        if self.favorites.remove(&drama_id) {
            false
        } else {
            self.favorites.insert(drama_id);
            true
        }
    }

    /// Append a watched drama to the history.
    pub fn record_watch(&mut self, drama_id: Uuid) {
        self.history.push(drama_id);
    }
}

/// Advisory role marker on the profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

// ---------------------------------------------------------------------------
// Transaction
// ---------------------------------------------------------------------------

/// An immutable record of a balance-affecting or informational event.
/// Once appended to the ledger it is never mutated or reordered; only cap
/// eviction removes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub kind: TransactionKind,
    /// Human-readable description shown in the transaction log.
    pub label: String,
    /// Signed amount; the sign conventionally matches credit/debit.
    pub amount: i64,
    pub status: TransactionStatus,
}

impl Transaction {
    /// Build a successful transaction stamped now.
    pub fn new(kind: TransactionKind, label: impl Into<String>, amount: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: Utc::now(),
            kind,
            label: label.into(),
            amount,
            status: TransactionStatus::Success,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Reward,
    Deposit,
    Purchase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Success,
    Pending,
    Failed,
}

// ---------------------------------------------------------------------------
// Drama / Episode
// ---------------------------------------------------------------------------

/// A catalog entry.  Created by an upload, deleted by explicit admin
/// action; there is no edit-in-place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drama {
    pub id: Uuid,
    pub title: String,
    pub cover_url: String,
    pub description: String,
    pub genre: String,
    pub rating: f64,
    /// Display name of the uploader.
    pub author: String,
    /// Episode order is the viewing order.
    #[serde(default)]
    pub episodes: Vec<Episode>,
}

/// One playable episode.  `is_locked` and `coin_cost` are carried and
/// round-tripped but no consumption path reads them yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub id: Uuid,
    pub episode_number: u32,
    /// Opaque playback locator, taken verbatim from the upload.
    pub url: String,
    #[serde(default)]
    pub is_locked: bool,
    #[serde(default)]
    pub coin_cost: i64,
}

// ---------------------------------------------------------------------------
// Ad configuration
// ---------------------------------------------------------------------------

/// Script placement for one banner zone.  Exactly one record exists per
/// position; the position is the effective key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdConfig {
    pub id: Uuid,
    pub position: AdPosition,
    /// Opaque third-party script, injected by the render layer.
    #[serde(default)]
    pub script_code: String,
    /// True iff `script_code` was non-empty at the time of the last update.
    #[serde(default)]
    pub is_active: bool,
}

impl AdConfig {
    /// The two zone records seeded at first run.  Only `script_code` and
    /// `is_active` are ever updated afterwards.
    pub fn seeded_pair() -> Vec<AdConfig> {
        [AdPosition::Top, AdPosition::Bottom]
            .into_iter()
            .map(|position| AdConfig {
                id: Uuid::new_v4(),
                position,
                script_code: String::new(),
                is_active: false,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdPosition {
    Top,
    Bottom,
}
