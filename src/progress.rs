//! Level progression controller: scoring, sequential unlocks, and retry
//! bookkeeping.
//!
//! [`LevelProgress`] owns every [`LevelRecord`] and the parallel retry-count
//! array.  Level buttons never mutate it directly; they mirror its state via
//! [`crate::level_button::refresh_level_buttons`].

use crate::config::{load_menu_config, MenuConfig};
use crate::constants::*;
use crate::error::{ProgressError, ProgressResult};
use crate::level_button::{handle_level_chosen, LevelChosen};
use crate::menu::MenuState;
use crate::minigame::{
    apply_minigame_outcome, tick_minigame_timer, MinigameOutcome, MinigameSession,
};
use bevy::prelude::*;

/// Index of a level in creation order (0-based, dense).
pub type LevelId = usize;

/// Unlock state for one stage in the progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelRecord {
    pub id: LevelId,
    pub unlocked: bool,
}

/// Parameters of the scoring formula.
///
/// `score = base − retries × retry_penalty × (difficulty / 10)
///               − (time_spent mod time_window) × time_penalty_per_sec`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreRules {
    pub base_score: f32,
    pub retry_penalty: f32,
    pub time_window_secs: f32,
    pub time_penalty_per_sec: f32,
    pub pass_threshold: f32,
    pub double_unlock_threshold: f32,
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self {
            base_score: BASE_SCORE,
            retry_penalty: RETRY_PENALTY,
            time_window_secs: TIME_WINDOW_SECS,
            time_penalty_per_sec: TIME_PENALTY_PER_SEC,
            pass_threshold: PASS_THRESHOLD,
            double_unlock_threshold: DOUBLE_UNLOCK_THRESHOLD,
        }
    }
}

impl ScoreRules {
    /// How many levels a score earns: 0, 1, or 2.
    pub fn levels_earned(&self, score: f32) -> usize {
        if score > self.double_unlock_threshold {
            2
        } else if score > self.pass_threshold {
            1
        } else {
            0
        }
    }
}

/// Result of a single [`LevelProgress::evaluate`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub score: f32,
    /// Levels the score earned before clamping (0, 1 or 2).
    pub requested: usize,
    /// Levels actually opened past the selected one after clamping.
    pub unlocked: usize,
}

/// Progress controller resource.
#[derive(Resource, Debug, Clone)]
pub struct LevelProgress {
    levels: Vec<LevelRecord>,
    retries: Vec<u32>,
    selected: LevelId,
    indicator: usize,
    rules: ScoreRules,
}

impl LevelProgress {
    /// Create `count` records in order.  Only the first starts unlocked.
    pub fn new(count: i32, rules: ScoreRules) -> ProgressResult<Self> {
        if count < 1 {
            return Err(ProgressError::InvalidLevelCount { got: count });
        }
        let len = count as usize;
        let levels = (0..len)
            .map(|id| LevelRecord {
                id,
                unlocked: id == 0,
            })
            .collect();
        Ok(Self {
            levels,
            retries: vec![0; len],
            selected: 0,
            indicator: 0,
            rules,
        })
    }

    pub fn levels(&self) -> &[LevelRecord] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false; construction rejects empty menus.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn rules(&self) -> &ScoreRules {
        &self.rules
    }

    pub fn selected(&self) -> LevelId {
        self.selected
    }

    pub fn is_unlocked(&self, level: LevelId) -> bool {
        self.levels.get(level).is_some_and(|r| r.unlocked)
    }

    /// Failed attempts since the level was last passed.
    pub fn retries(&self, level: LevelId) -> u32 {
        self.retries.get(level).copied().unwrap_or(0)
    }

    /// Current progress indicator value, in `0..=indicator_max()`.
    pub fn indicator(&self) -> usize {
        self.indicator
    }

    pub fn indicator_max(&self) -> usize {
        self.levels.len() - 1
    }

    /// Highest unlocked level id.
    pub fn furthest_unlocked(&self) -> LevelId {
        self.levels
            .iter()
            .rev()
            .find(|r| r.unlocked)
            .map_or(0, |r| r.id)
    }

    /// Record `level` as the one being played.
    pub fn select(&mut self, level: LevelId) -> ProgressResult<()> {
        if level >= self.levels.len() {
            return Err(ProgressError::UnknownLevel {
                level,
                len: self.levels.len(),
            });
        }
        self.selected = level;
        Ok(())
    }

    /// Score for the selected level given a difficulty and the time spent.
    pub fn score(&self, difficulty: i32, time_spent: f32) -> f32 {
        let rules = &self.rules;
        let difficulty_modifier = difficulty as f32 / 10.0;
        let retries = self.retries(self.selected) as f32;

        let mut score = rules.base_score;
        score -= retries * rules.retry_penalty * difficulty_modifier;
        score -= (time_spent % rules.time_window_secs) * rules.time_penalty_per_sec;
        score
    }

    /// Score the attempt and unlock the levels it earned.
    pub fn evaluate(&mut self, difficulty: i32, time_spent: f32) -> Evaluation {
        let score = self.score(difficulty, time_spent);
        let requested = self.rules.levels_earned(score);
        let unlocked = if requested > 0 {
            self.unlock_next(requested)
        } else {
            0
        };
        Evaluation {
            score,
            requested,
            unlocked,
        }
    }

    /// Unlock `selected..=selected + n`, stopping at the last record.
    ///
    /// The range is inclusive: the selected level itself is (re)unlocked along
    /// with the `n` after it.  Returns how many levels past `selected` were
    /// actually reached and moves the indicator there.
    fn unlock_next(&mut self, n: usize) -> usize {
        let mut reached = n;
        for i in 0..=n {
            let idx = self.selected + i;
            self.levels[idx].unlocked = true;
            if idx + 1 >= self.levels.len() {
                reached = i;
                break;
            }
        }
        self.indicator = self.selected + reached;
        reached
    }

    /// Passing a level clears its retry count.
    pub fn record_pass(&mut self, level: LevelId) {
        if let Some(tries) = self.retries.get_mut(level) {
            *tries = 0;
        }
    }

    /// Failing a level adds one retry.
    pub fn record_failure(&mut self, level: LevelId) {
        if let Some(tries) = self.retries.get_mut(level) {
            *tries = tries.saturating_add(1);
        }
    }
}

/// Startup system: build the [`LevelProgress`] resource from [`MenuConfig`].
///
/// An invalid level count logs the diagnostic and exits the app; no resource
/// is inserted, so UI setup systems see `None` and skip.
pub fn init_level_progress(
    mut commands: Commands,
    config: Res<MenuConfig>,
    mut exit: MessageWriter<AppExit>,
) {
    match LevelProgress::new(config.number_of_levels, config.score_rules()) {
        Ok(progress) => {
            info!("Level progress initialised with {} levels", progress.len());
            commands.insert_resource(progress);
        }
        Err(err) => {
            error!("LevelProgress: {err}");
            info!("Application quitting...");
            exit.write(AppExit::error());
        }
    }
}

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Registers [`MenuState`], the selection/outcome messages, the minigame
/// session, and the engine-independent progression systems.
///
/// Needs a [`MenuConfig`] resource (compiled defaults are used if none was
/// inserted) and `StatesPlugin` (part of `DefaultPlugins`).
pub struct ProgressionPlugin;

impl Plugin for ProgressionPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<MenuState>()
            .init_resource::<MenuConfig>()
            .init_resource::<MinigameSession>()
            .add_message::<LevelChosen>()
            .add_message::<MinigameOutcome>()
            .add_systems(Startup, init_level_progress.after(load_menu_config))
            .add_systems(
                Update,
                (
                    handle_level_chosen.run_if(in_state(MenuState::LevelSelect)),
                    (tick_minigame_timer, apply_minigame_outcome)
                        .chain()
                        .run_if(in_state(MenuState::Minigame)),
                )
                    .chain()
                    .run_if(resource_exists::<LevelProgress>),
            );
    }
}
