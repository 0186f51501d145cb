//! Headless tests for the minigame overlay driven by [`MinigamePanelPlugin`].
//!
//! These tests use [`MinimalPlugins`] with no window, rendering, or assets.
//! Button presses are simulated by setting [`Interaction::Pressed`] on the
//! overlay's button entities, the way the UI focus system would.
//!
//! Covered scenarios:
//! 1. Entering `Minigame` spawns one overlay; leaving despawns it.
//! 2. The BACK button returns to `LevelSelect` and removes the overlay.
//! 3. The WRONG button counts a retry and refreshes the retry readout.
//! 4. The CORRECT button scores the attempt and closes the overlay.
//! 5. Re-entering the minigame never stacks overlays.

use std::time::Duration;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use menu_progression::config::MenuConfig;
use menu_progression::level_button::LevelChosen;
use menu_progression::menu::{
    MenuState, MinigameBackButton, MinigameCorrectButton, MinigamePanelPlugin, MinigameRetryText,
    MinigameRoot, MinigameTimerText, MinigameWrongButton,
};
use menu_progression::progress::{LevelProgress, ProgressionPlugin};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn overlay_app(levels: i32) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::ZERO));
    app.insert_resource(MenuConfig {
        number_of_levels: levels,
        ..Default::default()
    });
    app.add_plugins((ProgressionPlugin, MinigamePanelPlugin));
    app.update();
    app
}

fn current(app: &App) -> MenuState {
    *app.world().resource::<State<MenuState>>().get()
}

fn count<C: Component>(app: &mut App) -> usize {
    app.world_mut()
        .query_filtered::<(), With<C>>()
        .iter(app.world())
        .count()
}

fn text_of<C: Component>(app: &mut App) -> String {
    app.world_mut()
        .query_filtered::<&Text, With<C>>()
        .single(app.world())
        .expect("exactly one readout")
        .0
        .clone()
}

fn open_minigame(app: &mut App, level: usize) {
    app.world_mut().write_message(LevelChosen { level });
    app.update();
    app.update();
    assert_eq!(current(app), MenuState::Minigame);
}

/// Press the overlay button tagged `C` and run one frame.
fn press<C: Component>(app: &mut App) {
    let button = app
        .world_mut()
        .query_filtered::<Entity, With<C>>()
        .single(app.world())
        .expect("button is spawned");
    app.world_mut()
        .entity_mut(button)
        .insert(Interaction::Pressed);
    app.update();
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn entering_minigame_spawns_overlay() {
    let mut app = overlay_app(3);
    assert_eq!(count::<MinigameRoot>(&mut app), 0);

    open_minigame(&mut app, 0);

    assert_eq!(count::<MinigameRoot>(&mut app), 1);
    assert_eq!(text_of::<MinigameTimerText>(&mut app), "00:00");
    assert_eq!(text_of::<MinigameRetryText>(&mut app), "Retries: 0");
}

#[test]
fn back_button_closes_overlay_without_scoring() {
    let mut app = overlay_app(3);
    open_minigame(&mut app, 0);

    press::<MinigameBackButton>(&mut app);
    app.update();

    assert_eq!(current(&app), MenuState::LevelSelect);
    assert_eq!(count::<MinigameRoot>(&mut app), 0);
    assert_eq!(count::<MinigameTimerText>(&mut app), 0);
    assert!(!app.world().resource::<LevelProgress>().is_unlocked(1));
}

#[test]
fn wrong_button_counts_retry_and_updates_readout() {
    let mut app = overlay_app(3);
    open_minigame(&mut app, 0);

    press::<MinigameWrongButton>(&mut app);
    app.update();

    assert_eq!(current(&app), MenuState::Minigame);
    assert_eq!(app.world().resource::<LevelProgress>().retries(0), 1);
    assert_eq!(text_of::<MinigameRetryText>(&mut app), "Retries: 1");
}

#[test]
fn correct_button_scores_and_closes_overlay() {
    let mut app = overlay_app(4);
    open_minigame(&mut app, 0);

    press::<MinigameCorrectButton>(&mut app);
    app.update();

    assert_eq!(current(&app), MenuState::LevelSelect);
    assert_eq!(count::<MinigameRoot>(&mut app), 0);
    let progress = app.world().resource::<LevelProgress>();
    assert!(progress.is_unlocked(2));
    assert!(!progress.is_unlocked(3));
}

#[test]
fn reopening_minigame_spawns_a_single_overlay() {
    let mut app = overlay_app(3);
    open_minigame(&mut app, 0);
    press::<MinigameBackButton>(&mut app);
    app.update();

    open_minigame(&mut app, 0);

    assert_eq!(count::<MinigameRoot>(&mut app), 1);
}
