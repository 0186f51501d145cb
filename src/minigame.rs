//! Minigame session: attempt timer, difficulty, and pass/fail reporting.
//!
//! ## Systems
//!
//! | System                   | Schedule              | Purpose                              |
//! |--------------------------|-----------------------|--------------------------------------|
//! | `tick_minigame_timer`    | `Update / Minigame`   | Accumulate elapsed attempt time      |
//! | `apply_minigame_outcome` | `Update / Minigame`   | Score passes, count failures         |
//!
//! The on-screen `MM:SS` display is refreshed by
//! [`crate::menu::minigame_panel`] from [`MinigameSession::display`].

use crate::menu::MenuState;
use crate::progress::LevelProgress;
use bevy::prelude::*;

/// What the player reported for the current attempt.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinigameOutcome {
    /// Attempt passed: score it and clear the level's retries.
    Correct,
    /// Attempt failed: count a retry; the session keeps running.
    Wrong,
    /// Leave the minigame without scoring.
    Abandon,
}

/// State of the active attempt.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct MinigameSession {
    /// Attempt-scoped difficulty weight fed into the score formula.
    pub difficulty: i32,
    /// `Time::elapsed_secs` when the timer was last reset.
    pub started_at_secs: f32,
    /// Seconds accumulated since the last reset.
    pub elapsed_secs: f32,
}

impl MinigameSession {
    /// Begin an attempt at `difficulty`.
    pub fn start(&mut self, difficulty: i32, now_secs: f32) {
        self.difficulty = difficulty;
        self.reset_timer(now_secs);
    }

    pub fn reset_timer(&mut self, now_secs: f32) {
        self.started_at_secs = now_secs;
        self.elapsed_secs = 0.0;
    }

    pub fn tick(&mut self, delta_secs: f32) {
        self.elapsed_secs += delta_secs;
    }

    /// Elapsed attempt time as `MM:SS`.
    pub fn display(&self) -> String {
        format_elapsed(self.elapsed_secs)
    }
}

/// Format whole elapsed seconds as zero-padded `MM:SS`.
pub fn format_elapsed(secs: f32) -> String {
    let whole = secs.max(0.0) as u32;
    format!("{:02}:{:02}", whole / 60, whole % 60)
}

/// Per-frame timer update while the minigame is shown.
pub fn tick_minigame_timer(time: Res<Time>, mut session: ResMut<MinigameSession>) {
    session.tick(time.delta_secs());
}

/// Apply reported outcomes to the progress controller.
///
/// - **Correct** → evaluate `(difficulty, elapsed)`, then reset the selected
///   level's retries and return to level select.
/// - **Wrong** → one more retry on the selected level; stay in the minigame.
/// - **Abandon** → return to level select untouched.
///
/// Outcomes after a Correct or Abandon in the same frame are dropped.
pub fn apply_minigame_outcome(
    mut outcomes: MessageReader<MinigameOutcome>,
    session: Res<MinigameSession>,
    mut progress: ResMut<LevelProgress>,
    mut next_state: ResMut<NextState<MenuState>>,
) {
    for outcome in outcomes.read() {
        let level = progress.selected();
        match outcome {
            MinigameOutcome::Correct => {
                let eval = progress.evaluate(session.difficulty, session.elapsed_secs);
                info!(
                    "Level {} passed in {}: score {:.2}, {} level(s) unlocked",
                    level + 1,
                    session.display(),
                    eval.score,
                    eval.unlocked
                );
                progress.record_pass(level);
                next_state.set(MenuState::LevelSelect);
                break;
            }
            MinigameOutcome::Wrong => {
                progress.record_failure(level);
                debug!(
                    "Level {} failed; retries now {}",
                    level + 1,
                    progress.retries(level)
                );
            }
            MinigameOutcome::Abandon => {
                next_state.set(MenuState::LevelSelect);
                break;
            }
        }
    }
    outcomes.clear();
}
