//! Level-select menu library
//!
//! A panel of level buttons that unlock progressively based on a scored
//! minigame outcome, backed by per-level retry counts and a progress bar.

pub mod config;
pub mod constants;
pub mod error;
pub mod graphics;
pub mod level_button;
pub mod menu;
pub mod minigame;
pub mod progress;
pub mod sprites;
