//! Keyed JSON snapshot storage for the application slices.
//!
//! Each slice (user profile, drama catalog, ad configuration) is stored
//! wholesale as one JSON document under a fixed key.  A missing or
//! unparsable snapshot falls back to the caller's default; corruption is
//! logged and never propagated.  Slices are independent: there is no
//! cross-slice transaction, and each save overwrites only its own key.

use chrono::Utc;
use rusqlite::params;
use serde::de::DeserializeOwned;
use serde::Serialize;

use layar_shared::models::{AdConfig, Drama, UserProfile};

use crate::database::SliceStore;
use crate::error::Result;

/// Key of the user profile slice.
pub const USER_SLICE: &str = "user_profile";

/// Key of the drama catalog slice.
pub const CATALOG_SLICE: &str = "drama_catalog";

/// Key of the ad configuration slice.
pub const ADS_SLICE: &str = "ad_config";

impl SliceStore {
    // ------------------------------------------------------------------
    // Generic load / save
    // ------------------------------------------------------------------

    /// Load the snapshot stored under `key`, falling back to `default`
    /// when the key is absent or its JSON no longer parses.
    pub fn load<T, F>(&self, key: &str, default: F) -> T
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        let row: std::result::Result<String, rusqlite::Error> = self.conn().query_row(
            "SELECT json FROM slices WHERE key = ?1",
            params![key],
            |row| row.get(0),
        );

        match row {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!(key, error = %e, "corrupt slice snapshot, using default");
                    default()
                }
            },
            Err(_) => default(),
        }
    }

    /// Serialize `value` and overwrite the snapshot stored under `key`.
    ///
    /// This is the only write path into the backing store; callers never
    /// touch the `slices` table directly.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.conn().execute(
            "INSERT OR REPLACE INTO slices (key, json, updated_at) VALUES (?1, ?2, ?3)",
            params![key, json, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn has_slice(&self, key: &str) -> bool {
        self.conn()
            .query_row(
                "SELECT 1 FROM slices WHERE key = ?1",
                params![key],
                |_| Ok(()),
            )
            .is_ok()
    }

    // ------------------------------------------------------------------
    // Typed helpers
    // ------------------------------------------------------------------

    /// Load the user profile, seeding the welcome state if none exists.
    pub fn load_profile(&self) -> UserProfile {
        self.load(USER_SLICE, UserProfile::seeded)
    }

    pub fn save_profile(&self, profile: &UserProfile) -> Result<()> {
        self.save(USER_SLICE, profile)
    }

    /// Load the drama catalog (most-recently-added first).
    pub fn load_catalog(&self) -> Vec<Drama> {
        self.load(CATALOG_SLICE, Vec::new)
    }

    pub fn save_catalog(&self, catalog: &[Drama]) -> Result<()> {
        self.save(CATALOG_SLICE, &catalog)
    }

    /// Load the ad configuration, seeding both zones if none exists.
    pub fn load_ads(&self) -> Vec<AdConfig> {
        self.load(ADS_SLICE, AdConfig::seeded_pair)
    }

    pub fn save_ads(&self, ads: &[AdConfig]) -> Result<()> {
        self.save(ADS_SLICE, &ads)
    }

    /// Persist defaults for any slice that has never been written, so the
    /// seeded first-run state (welcome bonus, empty catalog, two ad
    /// zones) is durable before the first user action.
    pub fn ensure_seeded(&self) -> Result<()> {
        if !self.has_slice(USER_SLICE) {
            self.save_profile(&UserProfile::seeded())?;
        }
        if !self.has_slice(CATALOG_SLICE) {
            self.save_catalog(&[])?;
        }
        if !self.has_slice(ADS_SLICE) {
            self.save_ads(&AdConfig::seeded_pair())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;
    use layar_shared::models::{AdPosition, Episode, TransactionKind};
    use layar_shared::{catalog, ledger, rewards};
    use tempfile::TempDir;
    use uuid::Uuid;

    fn open_store() -> (TempDir, SliceStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SliceStore::open_at(&dir.path().join("test.db")).unwrap();
        (dir, store)
    }

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn missing_slice_falls_back_to_default() {
        let (_dir, store) = open_store();

        let profile = store.load_profile();
        assert_eq!(profile.coins, 100);

        assert!(store.load_catalog().is_empty());
        assert_eq!(store.load_ads().len(), 2);
    }

    #[test]
    fn corrupt_snapshot_falls_back_to_default() {
        let (_dir, store) = open_store();

        store
            .conn()
            .execute(
                "INSERT OR REPLACE INTO slices (key, json, updated_at) VALUES (?1, ?2, ?3)",
                params![USER_SLICE, "{not json", "2024-01-01T00:00:00Z"],
            )
            .unwrap();

        let profile = store.load_profile();
        assert_eq!(profile.coins, 100);
        assert_eq!(profile.transactions.len(), 1);
    }

    #[test]
    fn profile_round_trip_preserves_every_field() {
        let (_dir, store) = open_store();

        let mut profile = UserProfile::seeded();
        profile.name = "Ayu".to_string();
        profile.is_vip = true;
        profile.toggle_favorite(Uuid::new_v4());
        profile.record_watch(Uuid::new_v4());
        profile.last_check_in = Some(day("2024-06-01"));
        profile.ip_address = Some("203.0.113.9".to_string());
        ledger::record(&mut profile, TransactionKind::Purchase, "Episode unlock", -20);

        store.save_profile(&profile).unwrap();
        assert_eq!(store.load_profile(), profile);
    }

    #[test]
    fn catalog_round_trip_preserves_lock_fields() {
        let (_dir, store) = open_store();

        let mut catalog = Vec::new();
        let mut drama = catalog::upload(
            &mut catalog,
            catalog::DramaUpload {
                title: Some("Senja".to_string()),
                url: "https://cdn/ep1".to_string(),
                ..Default::default()
            },
            "Ayu",
        );
        // Locking and cost are carried even though nothing consumes them.
        drama.episodes.push(Episode {
            id: Uuid::new_v4(),
            episode_number: 2,
            url: "https://cdn/ep2".to_string(),
            is_locked: true,
            coin_cost: 30,
        });
        catalog[0] = drama;

        store.save_catalog(&catalog).unwrap();
        let reloaded = store.load_catalog();
        assert_eq!(reloaded, catalog);
        assert!(reloaded[0].episodes[1].is_locked);
        assert_eq!(reloaded[0].episodes[1].coin_cost, 30);
    }

    #[test]
    fn ads_round_trip() {
        let (_dir, store) = open_store();

        let mut ads = AdConfig::seeded_pair();
        layar_shared::ads::update_script(&mut ads, AdPosition::Top, "<script/>".to_string());

        store.save_ads(&ads).unwrap();
        assert_eq!(store.load_ads(), ads);
    }

    #[test]
    fn save_overwrites_wholesale() {
        let (_dir, store) = open_store();

        let mut profile = store.load_profile();
        store.save_profile(&profile).unwrap();

        profile.name = "Renamed".to_string();
        store.save_profile(&profile).unwrap();

        assert_eq!(store.load_profile().name, "Renamed");
    }

    #[test]
    fn ensure_seeded_does_not_clobber_existing_state() {
        let (_dir, store) = open_store();
        store.ensure_seeded().unwrap();

        let mut profile = store.load_profile();
        ledger::admin_adjust(&mut profile, 900);
        store.save_profile(&profile).unwrap();

        store.ensure_seeded().unwrap();
        assert_eq!(store.load_profile().coins, 1000);
    }

    // Fresh start, one claim, a repeat claim, an upload, an admin debit:
    // the full first-session lifecycle against a real database file.
    #[test]
    fn first_session_lifecycle() {
        let (_dir, store) = open_store();
        store.ensure_seeded().unwrap();

        // Fresh start: welcome balance and one welcome entry.
        let mut profile = store.load_profile();
        assert_eq!(profile.coins, 100);
        assert_eq!(profile.transactions.len(), 1);
        assert_eq!(profile.transactions[0].amount, 100);

        // Same-day claim credits exactly once.
        let today = chrono::Local::now().date_naive();
        assert!(rewards::apply_claim(&mut profile, today).is_some());
        store.save_profile(&profile).unwrap();

        let mut profile = store.load_profile();
        assert_eq!(profile.coins, 150);
        assert_eq!(profile.transactions.len(), 2);
        assert_eq!(profile.transactions[0].date.date_naive(), chrono::Utc::now().date_naive());

        assert!(rewards::apply_claim(&mut profile, today).is_none());
        store.save_profile(&profile).unwrap();
        assert_eq!(store.load_profile().coins, 150);

        // Upload lands at index 0 with the verbatim url.
        let mut cat = store.load_catalog();
        catalog::upload(
            &mut cat,
            catalog::DramaUpload {
                title: Some("X".to_string()),
                url: "u".to_string(),
                ..Default::default()
            },
            &profile.name,
        );
        store.save_catalog(&cat).unwrap();

        let cat = store.load_catalog();
        assert_eq!(cat[0].title, "X");
        assert_eq!(cat[0].episodes[0].url, "u");
        assert_eq!(cat[0].episodes[0].episode_number, 1);

        // Admin debit below zero is accepted and recorded verbatim.
        let mut profile = store.load_profile();
        ledger::admin_adjust(&mut profile, -550);
        store.save_profile(&profile).unwrap();

        let profile = store.load_profile();
        assert_eq!(profile.coins, -400);
        assert_eq!(profile.transactions[0].kind, TransactionKind::Deposit);
        assert_eq!(profile.transactions[0].amount, -550);
    }
}
