use bevy::prelude::*;

/// Top-level menu state machine.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MenuState {
    /// Level panel accepts presses; shown on startup.
    #[default]
    LevelSelect,
    /// Minigame overlay is open for the selected level.
    Minigame,
}

/// Root node of the level-select screen.
#[derive(Component)]
pub struct LevelSelectRoot;

/// Container the level buttons are spawned into.
#[derive(Component)]
pub struct LevelPanel;

/// Progress indicator track.  `value` runs from 0 to `max`.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct ProgressBar {
    pub value: f32,
    pub max: f32,
}

impl ProgressBar {
    /// Fill width as a percentage of the track, clamped to `[0, 100]`.
    ///
    /// A bar with no range (single-level menu) is full.
    pub fn fill_percent(&self) -> f32 {
        if self.max <= 0.0 {
            return 100.0;
        }
        (self.value / self.max * 100.0).clamp(0.0, 100.0)
    }
}

/// Fill child of the [`ProgressBar`] track.
#[derive(Component)]
pub struct ProgressBarFill;

/// "Progress: x / y" readout under the bar.
#[derive(Component)]
pub struct ProgressBarLabel;

/// Root node of the minigame overlay; despawned on `OnExit(Minigame)`.
#[derive(Component)]
pub struct MinigameRoot;

/// Tags the "CORRECT" button in the minigame overlay.
#[derive(Component)]
pub struct MinigameCorrectButton;

/// Tags the "WRONG" button in the minigame overlay.
#[derive(Component)]
pub struct MinigameWrongButton;

/// Tags the "BACK" button in the minigame overlay.
#[derive(Component)]
pub struct MinigameBackButton;

/// `MM:SS` attempt timer text.
#[derive(Component)]
pub struct MinigameTimerText;

/// Retry counter text for the selected level.
#[derive(Component)]
pub struct MinigameRetryText;
