// Main loop timing
pub const TICK_INTERVAL_MS: u64 = 50;

// Sequence playback: each symbol is lit for HIGHLIGHT_MS, then the board
// goes dark for PLAYBACK_GAP_MS before the next symbol.
pub const HIGHLIGHT_MS: u64 = 700;
pub const PLAYBACK_GAP_MS: u64 = 200;

// Round structure
pub const MAX_ROUNDS: u32 = 5;
pub const ALLOWED_ERRORS_PER_ROUND: u32 = 1;

// Input handling: a fresh keypress lights its cell for KEY_FLASH_MS and
// further symbol input is dropped for KEY_DEBOUNCE_MS (key-repeat guard).
pub const KEY_FLASH_MS: u64 = 180;
pub const KEY_DEBOUNCE_MS: u64 = 120;

// Settings file name inside the platform config dir
pub const SETTINGS_FILE: &str = "settings.json";
