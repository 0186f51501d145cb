//! Runtime menu configuration loaded from `assets/menu.toml`.
//!
//! [`MenuConfig`] is a Bevy [`Resource`] that mirrors the constants in
//! [`crate::constants`].  At startup, [`load_menu_config`] reads
//! `assets/menu.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a minimal
//! TOML can override just the values you care about.
//!
//! Unlike a tuning file, this config is part of the startup contract: a file
//! that exists but cannot be read or parsed terminates the app.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::error::{ProgressError, ProgressResult};
use crate::progress::ScoreRules;
use bevy::prelude::*;
use serde::Deserialize;

/// Default location of the config file, relative to the working directory.
pub const MENU_CONFIG_PATH: &str = "assets/menu.toml";

/// Overrides [`MENU_CONFIG_PATH`] for [`load_menu_config`] when present.
#[derive(Resource, Debug, Clone)]
pub struct MenuConfigPath(pub PathBuf);

/// Runtime-tunable menu configuration.
#[derive(Resource, Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct MenuConfig {
    // ── Levels ────────────────────────────────────────────────────────────────
    /// Signed so that a bad value reaches validation instead of failing the parse.
    pub number_of_levels: i32,
    pub level_label_prefix: String,

    // ── Sprites ───────────────────────────────────────────────────────────────
    pub locked_sprite: String,
    pub unlocked_sprite: String,

    // ── Scoring ───────────────────────────────────────────────────────────────
    pub base_score: f32,
    pub retry_penalty: f32,
    pub time_window_secs: f32,
    pub time_penalty_per_sec: f32,
    pub pass_threshold: f32,
    pub double_unlock_threshold: f32,

    // ── UI ────────────────────────────────────────────────────────────────────
    pub label_font_size: f32,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            number_of_levels: NUMBER_OF_LEVELS,
            level_label_prefix: LEVEL_LABEL_PREFIX.to_string(),
            locked_sprite: LOCKED_SPRITE_PATH.to_string(),
            unlocked_sprite: UNLOCKED_SPRITE_PATH.to_string(),
            base_score: BASE_SCORE,
            retry_penalty: RETRY_PENALTY,
            time_window_secs: TIME_WINDOW_SECS,
            time_penalty_per_sec: TIME_PENALTY_PER_SEC,
            pass_threshold: PASS_THRESHOLD,
            double_unlock_threshold: DOUBLE_UNLOCK_THRESHOLD,
            label_font_size: LABEL_FONT_SIZE,
        }
    }
}

impl MenuConfig {
    /// Scoring parameters handed to [`crate::progress::LevelProgress`].
    pub fn score_rules(&self) -> ScoreRules {
        ScoreRules {
            base_score: self.base_score,
            retry_penalty: self.retry_penalty,
            time_window_secs: self.time_window_secs,
            time_penalty_per_sec: self.time_penalty_per_sec,
            pass_threshold: self.pass_threshold,
            double_unlock_threshold: self.double_unlock_threshold,
        }
    }

    /// Parse a config from TOML text.
    pub fn from_toml_str(contents: &str, path: &str) -> ProgressResult<Self> {
        toml::from_str::<MenuConfig>(contents).map_err(|source| ProgressError::ConfigParse {
            path: path.to_string(),
            source,
        })
    }
}

/// Read `path` into a [`MenuConfig`].
///
/// Returns `Ok(None)` only when the file does not exist; any other I/O
/// failure (permissions, a directory, non-UTF-8 bytes) is an error.
pub fn read_menu_config(path: impl AsRef<Path>) -> ProgressResult<Option<MenuConfig>> {
    let path = path.as_ref();
    let display = path.display().to_string();
    match std::fs::read_to_string(path) {
        Ok(contents) => MenuConfig::from_toml_str(&contents, &display).map(Some),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ProgressError::ConfigRead {
            path: display,
            source,
        }),
    }
}

/// Startup system: attempt to load the config file and overwrite the
/// `MenuConfig` resource with any values present in it.
///
/// Reads [`MenuConfigPath`] if inserted, else [`MENU_CONFIG_PATH`].  A missing
/// file is not an error (defaults are already in place).  A file that can't
/// be read or parsed logs the diagnostic and exits.
pub fn load_menu_config(
    mut config: ResMut<MenuConfig>,
    path: Option<Res<MenuConfigPath>>,
    mut exit: MessageWriter<AppExit>,
) {
    let path = path.map_or_else(|| PathBuf::from(MENU_CONFIG_PATH), |p| p.0.clone());
    match read_menu_config(&path) {
        Ok(Some(loaded)) => {
            *config = loaded;
            info!("Loaded menu config from {}", path.display());
        }
        Ok(None) => {
            info!("No {} found; using compiled defaults", path.display());
        }
        Err(err) => {
            error!("MenuConfig: {err}");
            info!("Application quitting...");
            exit.write(AppExit::error());
        }
    }
}
