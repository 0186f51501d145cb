//! Level-select menu and minigame overlay: `MenuState` definition and
//! `MenuPlugin`.
//!
//! ## States
//!
//! | State         | Description                                        |
//! |---------------|----------------------------------------------------|
//! | `LevelSelect` | Initial state; level buttons accept presses        |
//! | `Minigame`    | Minigame overlay shown above the frozen level panel |
//!
//! ## Systems (registered by `MenuPlugin`; overlay rows by `MinigamePanelPlugin`)
//!
//! | System                     | Schedule                 | Purpose                          |
//! |----------------------------|--------------------------|----------------------------------|
//! | `load_level_sprites`       | `Startup`                | Request locked/unlocked sprites  |
//! | `spawn_level_select_menu`  | `Startup`                | Spawn panel, buttons, progress bar |
//! | `verify_menu_widgets`      | `PostStartup`            | Exit if a required widget is missing |
//! | `verify_level_sprites`     | `Update`                 | Exit if a sprite fails to load   |
//! | `level_button_system`      | `Update / LevelSelect`   | Button presses and hover tint    |
//! | `refresh_level_buttons`    | `Update`                 | Mirror unlocks onto buttons      |
//! | `refresh_progress_bar`     | `Update`                 | Move the progress indicator      |
//! | `setup_minigame_panel`     | `OnEnter(Minigame)`      | Spawn the minigame overlay       |
//! | `minigame_button_system`   | `Update / Minigame`      | Correct / Wrong / Back presses   |
//! | `update_minigame_texts`    | `Update / Minigame`      | Timer and retry readouts         |
//! | `cleanup_minigame_panel`   | `OnExit(Minigame)`       | Despawn the overlay              |
//!
//! The engine-independent systems (selection, timer, scoring) live in
//! [`crate::progress::ProgressionPlugin`]; add it alongside this plugin.

use bevy::prelude::*;

use crate::config::{load_menu_config, MenuConfig};
use crate::constants::*;
use crate::error::ProgressError;
use crate::graphics::setup_camera;
use crate::level_button::{
    handle_level_chosen, level_button_bundle, level_button_system, locked_label_color,
    refresh_level_buttons, unlocked_label_color, LevelButton, LevelButtonLabel,
};
use crate::minigame::{apply_minigame_outcome, MinigameOutcome, MinigameSession};
use crate::progress::{init_level_progress, LevelProgress};
use crate::sprites::{load_level_sprites, verify_level_sprites, LevelSprites};

mod common;
mod level_select;
pub mod minigame_panel;
mod types;

use common::*;
pub use level_select::*;
pub use minigame_panel::*;
pub use types::*;

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Registers the level-select UI, widget checks, button handlers, and the
/// [`MinigamePanelPlugin`].
pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                setup_camera,
                load_level_sprites.after(load_menu_config),
                spawn_level_select_menu
                    .after(load_level_sprites)
                    .after(init_level_progress),
            ),
        )
        .add_plugins(MinigamePanelPlugin)
        .add_systems(PostStartup, verify_menu_widgets)
        .add_systems(
            Update,
            verify_level_sprites.run_if(resource_exists::<LevelSprites>),
        )
        .add_systems(
            Update,
            (
                level_button_system
                    .before(handle_level_chosen)
                    .run_if(in_state(MenuState::LevelSelect)),
                (refresh_level_buttons, refresh_progress_bar).after(apply_minigame_outcome),
            )
                .run_if(resource_exists::<LevelProgress>.and(resource_exists::<LevelSprites>)),
        );
    }
}
