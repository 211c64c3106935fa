// Process-wide configuration. Everything here is a compile-time constant:
// the CLI has no config file and reads no environment variables, so the
// API endpoints can only be changed through `ApiClient::with_base_urls`
// (used by the integration tests).

/// Base URL of the equran.id v2 API (surah list, surah detail, tafsir).
pub const QURAN_API_BASE: &str = "https://equran.id/api/v2";

/// Base URL of the hadith API (books, single hadith, ranged hadith).
pub const HADITH_API_BASE: &str = "https://api.hadith.gading.dev";

/// Number of surahs in the Quran; valid surah numbers are `1..=SURAH_COUNT`.
pub const SURAH_COUNT: u32 = 114;

/// Server-side cap on a ranged hadith request.
pub const HADITH_RANGE_LIMIT: u32 = 300;

/// Width used for separator rules when the terminal size is unknown.
pub const FALLBACK_WIDTH: usize = 80;

pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
