//! Ad placement updates for the two fixed banner zones.

use crate::models::{AdConfig, AdPosition};

/// Replace the script for the given zone and recompute its active flag.
///
/// Returns the updated record, or `None` when no record matches the
/// position (a seeded slice always has both zones).
pub fn update_script(ads: &mut [AdConfig], position: AdPosition, code: String) -> Option<AdConfig> {
    let slot = ads.iter_mut().find(|ad| ad.position == position)?;
    slot.is_active = !code.is_empty();
    slot.script_code = code;
    Some(slot.clone())
}
