// src/config/mod.rs
// Fixed behavior constants. The upstream base path and page sizes are part of
// the product contract, not configuration; nothing here reads the environment.

use std::time::Duration;

/// Base path of the upstream PokeAPI service.
pub const BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Entries shown per browse page.
pub const PAGE_SIZE: usize = 12;

/// One-shot fetch size for the session-wide reference index.
pub const INDEX_LIMIT: u32 = 1000;

/// Upper bound on entries fetched for a single type filter, to keep the
/// member batch from overwhelming the display.
pub const TYPE_MEMBER_CAP: usize = 50;

/// How long a JSON-path highlight stays active before auto-clearing.
pub const HIGHLIGHT_TTL: Duration = Duration::from_secs(3);

/// Pseudo-types the upstream lists but that are not selectable filters.
pub const EXCLUDED_TYPES: [&str; 2] = ["unknown", "shadow"];

/// Maximum page buttons visible in the pagination window.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// Request timeout for all upstream calls.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Denominator for the stat bar ratio (stats are displayed relative to 150).
pub const STAT_BAR_MAX: u32 = 150;
