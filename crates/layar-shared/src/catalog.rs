//! Drama catalog mutations: upload with defaults, delete by id.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{
    DEFAULT_COVER_URL, DEFAULT_DESCRIPTION, DEFAULT_GENRE, DEFAULT_RATING, DEFAULT_TITLE,
};
use crate::models::{Drama, Episode};

/// Fields accepted from the upload form.  Everything except the playback
/// `url` may be omitted or blank; [`upload`] fills in the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DramaUpload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    pub url: String,
}

/// Build a drama from the upload fields and prepend it to the catalog
/// (most-recently-added first).
///
/// The new drama carries exactly one unlocked episode numbered 1 whose
/// playback url is taken verbatim from the form.
pub fn upload(catalog: &mut Vec<Drama>, fields: DramaUpload, author: &str) -> Drama {
    let drama = Drama {
        id: Uuid::new_v4(),
        title: or_default(fields.title, DEFAULT_TITLE),
        cover_url: or_default(fields.cover_url, DEFAULT_COVER_URL),
        description: or_default(fields.description, DEFAULT_DESCRIPTION),
        genre: or_default(fields.genre, DEFAULT_GENRE),
        rating: DEFAULT_RATING,
        author: author.to_string(),
        episodes: vec![Episode {
            id: Uuid::new_v4(),
            episode_number: 1,
            url: fields.url,
            is_locked: false,
            coin_cost: 0,
        }],
    };

    catalog.insert(0, drama.clone());
    drama
}

/// Remove the drama with the given id.  Returns `false` when no entry
/// matched; an absent id is a silent no-op, not an error.
pub fn remove(catalog: &mut Vec<Drama>, id: Uuid) -> bool {
    let before = catalog.len();
    catalog.retain(|d| d.id != id);
    catalog.len() != before
}

fn or_default(value: Option<String>, fallback: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
