/// Application name
pub const APP_NAME: &str = "Layar";

/// Coins credited to a brand-new profile
pub const WELCOME_BONUS_COINS: i64 = 100;

/// Ledger label for the first-run credit
pub const WELCOME_BONUS_LABEL: &str = "Welcome bonus";

/// Coins credited per daily check-in
pub const DAILY_REWARD_COINS: i64 = 50;

/// Ledger label for the daily check-in credit
pub const DAILY_REWARD_LABEL: &str = "Daily check-in bonus";

/// Ledger label for a manual admin balance adjustment
pub const ADMIN_TOPUP_LABEL: &str = "Admin top-up";

/// Maximum number of retained ledger entries; the oldest is evicted first
pub const LEDGER_CAP: usize = 50;

/// Simulated verification delay before a reward credit lands, in milliseconds
pub const REWARD_VERIFY_DELAY_MS: u64 = 1500;

/// Display name given to a brand-new profile
pub const DEFAULT_DISPLAY_NAME: &str = "Layar User";

/// Fallback title for an upload that omits one
pub const DEFAULT_TITLE: &str = "Untitled";

/// Fallback genre for an upload that omits one
pub const DEFAULT_GENRE: &str = "Trending";

/// Fallback cover image for an upload that omits one
pub const DEFAULT_COVER_URL: &str =
    "https://images.unsplash.com/photo-1485846234645-a62644f84728?auto=format&fit=crop&q=80&w=400";

/// Fallback description for an upload that omits one
pub const DEFAULT_DESCRIPTION: &str = "An exclusive Layar original.";

/// Rating assigned to fresh uploads
pub const DEFAULT_RATING: f64 = 9.9;

/// Public IP lookup endpoint used by the startup enrichment task
pub const IP_LOOKUP_URL: &str = "https://api.ipify.org?format=json";
