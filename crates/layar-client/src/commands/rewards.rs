use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::Serialize;
use tauri::State;
use tracing::info;

use layar_shared::constants::REWARD_VERIFY_DELAY_MS;
use layar_shared::rewards;

use crate::state::AppState;

/// Result of a daily-reward claim attempt.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimOutcome {
    pub claimed: bool,
    pub coins: i64,
}

/// Claim the daily check-in reward.
///
/// Already claimed today: returns immediately with no state change.
/// Otherwise the credit lands after a fixed verification delay, applied as
/// a merge against whatever the profile looks like by then, so edits made
/// while the verification was pending are kept.  The UI disables the
/// trigger while a claim is in flight; the date gate keeps the credit
/// at-most-once per day regardless.
#[tauri::command]
pub async fn claim_daily_reward(
    state: State<'_, Arc<Mutex<AppState>>>,
) -> Result<ClaimOutcome, String> {
    let app = state.inner().clone();
    let today = chrono::Local::now().date_naive();

    {
        let guard = app.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
        let profile = guard.store.load_profile();
        if !rewards::can_claim(&profile, today) {
            return Ok(ClaimOutcome {
                claimed: false,
                coins: profile.coins,
            });
        }
    }

    tokio::time::sleep(Duration::from_millis(REWARD_VERIFY_DELAY_MS)).await;

    let guard = app.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    let mut profile = guard.store.load_profile();

    match rewards::apply_claim(&mut profile, today) {
        Some(tx) => {
            guard
                .store
                .save_profile(&profile)
                .map_err(|e| format!("Failed to save profile: {e}"))?;

            info!(amount = tx.amount, date = %today, "Daily reward claimed");
            Ok(ClaimOutcome {
                claimed: true,
                coins: profile.coins,
            })
        }
        // Claimed elsewhere while verification was pending; stay a no-op.
        None => Ok(ClaimOutcome {
            claimed: false,
            coins: profile.coins,
        }),
    }
}
