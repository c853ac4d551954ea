//! One-shot startup enrichment of the user profile.

use std::sync::{Arc, Mutex};

use serde::Deserialize;
use tracing::{info, warn};

use layar_shared::constants::IP_LOOKUP_URL;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct IpLookupResponse {
    ip: String,
}

/// Fetch the public IP once and merge it into the user slice.
///
/// The merge sets the field only if it is still absent, against whatever
/// the profile looks like at completion time, so edits made while the
/// lookup was in flight are kept.  Failure is logged and swallowed; the
/// profile simply keeps an empty `ip_address`.
pub async fn detect_public_ip(state: Arc<Mutex<AppState>>) {
    let ip = match fetch_ip().await {
        Ok(ip) => ip,
        Err(e) => {
            warn!(error = %e, "IP detection failed");
            return;
        }
    };

    let Ok(guard) = state.lock() else {
        warn!("IP detection finished against a poisoned state, skipping");
        return;
    };

    let mut profile = guard.store.load_profile();
    if profile.ip_address.is_some() {
        return;
    }

    profile.ip_address = Some(ip);
    match guard.store.save_profile(&profile) {
        Ok(()) => info!("Profile enriched with public IP"),
        Err(e) => warn!(error = %e, "Failed to persist IP enrichment"),
    }
}

async fn fetch_ip() -> Result<String, reqwest::Error> {
    let resp = reqwest::get(IP_LOOKUP_URL).await?;
    let body: IpLookupResponse = resp.json().await?;
    Ok(body.ip)
}
