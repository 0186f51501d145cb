//! Menu-specific error types.
//!
//! Every variant here is a startup contract violation except
//! [`ProgressError::UnknownLevel`], which is logged and ignored at runtime.
//! Startup systems log the error and write [`bevy::app::AppExit::error`]
//! instead of panicking.

use thiserror::Error;

/// Top-level error enum for the level-select menu.
#[derive(Debug, Error)]
pub enum ProgressError {
    /// The configured level count is zero or negative.
    #[error("number of levels must be at least 1, got {got}")]
    InvalidLevelCount {
        /// The value that was rejected.
        got: i32,
    },

    /// A level id outside `0..len` was selected.
    #[error("level {level} does not exist (menu has {len} levels)")]
    UnknownLevel { level: usize, len: usize },

    /// A required UI widget was not spawned.
    #[error("required widget '{widget}' is missing")]
    MissingWidget {
        /// Human-readable widget name (for logging).
        widget: &'static str,
    },

    /// One of the level sprites failed to load.
    #[error("couldn't load the {name} sprite from '{path}'")]
    SpriteLoad { name: &'static str, path: String },

    /// `assets/menu.toml` exists but could not be read.
    #[error("failed to read {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// `assets/menu.toml` exists but is not valid.
    #[error("failed to parse {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Convenience alias: a `Result` using `ProgressError` as the error type.
pub type ProgressResult<T> = Result<T, ProgressError>;
