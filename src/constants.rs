//! Centralised menu and scoring constants.
//!
//! These are the compiled defaults behind [`crate::config::MenuConfig`].
//! Override any of them from `assets/menu.toml` without recompiling.

// ── Levels ────────────────────────────────────────────────────────────────────

/// Number of level buttons spawned when no config file overrides it.
pub const NUMBER_OF_LEVELS: i32 = 10;

/// Label prefix; buttons read "Level 1", "Level 2", ...
pub const LEVEL_LABEL_PREFIX: &str = "Level";

// ── Sprites ───────────────────────────────────────────────────────────────────

/// Asset path (relative to `assets/`) of the locked-level sprite.
pub const LOCKED_SPRITE_PATH: &str = "sprites/spr_lockedLevel.png";

/// Asset path (relative to `assets/`) of the unlocked-level sprite.
pub const UNLOCKED_SPRITE_PATH: &str = "sprites/spr_unlockedLevel.png";

// ── Scoring ───────────────────────────────────────────────────────────────────

/// Score awarded before any penalty is subtracted.
pub const BASE_SCORE: f32 = 10.0;

/// Penalty per retry at difficulty 10.
///
/// `retry_penalty = retries × RETRY_PENALTY × (difficulty / 10)`
pub const RETRY_PENALTY: f32 = 5.0;

/// Elapsed time is taken modulo this window before being penalised.
pub const TIME_WINDOW_SECS: f32 = 10.0;

/// Score lost per second inside the time window.
pub const TIME_PENALTY_PER_SEC: f32 = 0.5;

/// A score strictly above this unlocks the next level.
pub const PASS_THRESHOLD: f32 = 5.0;

/// A score strictly above this unlocks two levels instead of one.
pub const DOUBLE_UNLOCK_THRESHOLD: f32 = 9.0;

// ── UI ────────────────────────────────────────────────────────────────────────

/// Font size used for level button labels.
pub const LABEL_FONT_SIZE: f32 = 18.0;

/// Edge length of a level button (px).
pub const LEVEL_BUTTON_SIZE: f32 = 96.0;

/// Width of the progress bar track (px).
pub const PROGRESS_BAR_WIDTH: f32 = 520.0;
