//! Level buttons: one per [`LevelRecord`](crate::progress::LevelRecord).
//!
//! A button mirrors its record's lock state; it never owns it.  Pressing an
//! unlocked button writes [`LevelChosen`], which [`handle_level_chosen`] turns
//! into a selection on the controller plus a fresh minigame session.

use crate::menu::MenuState;
use crate::minigame::MinigameSession;
use crate::progress::{LevelId, LevelProgress};
use crate::sprites::LevelSprites;
use bevy::prelude::*;

/// Handle for one level in the select panel.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelButton {
    pub id: LevelId,
    /// Whether the button accepts presses.  Only ever goes `false → true`.
    pub unlocked: bool,
}

impl LevelButton {
    pub fn new(id: LevelId, unlocked: bool) -> Self {
        Self { id, unlocked }
    }
}

/// Label text child of a [`LevelButton`].
#[derive(Component)]
pub struct LevelButtonLabel;

/// A level button was activated.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelChosen {
    pub level: LevelId,
}

/// Text tint for an unlocked label at rest.
pub fn unlocked_label_color() -> Color {
    Color::srgb(0.90, 0.90, 1.0)
}

/// Text tint for a locked label.
pub fn locked_label_color() -> Color {
    Color::srgb(0.35, 0.35, 0.42)
}

/// Image tint applied over the sprite; locked buttons are dimmed.
fn sprite_tint(unlocked: bool) -> Color {
    if unlocked {
        Color::WHITE
    } else {
        Color::srgb(0.55, 0.55, 0.60)
    }
}

/// Handle presses and hover tint on level buttons.
///
/// Locked buttons ignore every interaction.
#[allow(clippy::type_complexity)]
pub fn level_button_system(
    buttons: Query<(&Interaction, &LevelButton, &Children), Changed<Interaction>>,
    mut labels: Query<&mut TextColor, With<LevelButtonLabel>>,
    mut chosen: MessageWriter<LevelChosen>,
) {
    for (interaction, button, children) in buttons.iter() {
        if !button.unlocked {
            continue;
        }
        let tint = match interaction {
            Interaction::Pressed => {
                chosen.write(LevelChosen { level: button.id });
                continue;
            }
            Interaction::Hovered => Color::WHITE,
            Interaction::None => unlocked_label_color(),
        };
        for child in children.iter() {
            if let Ok(mut color) = labels.get_mut(child) {
                *color = TextColor(tint);
            }
        }
    }
}

/// Record the chosen level and start a minigame session for it.
///
/// Difficulty is the level id.  Of several presses in one frame the last
/// unlocked one wins; locked or unknown levels are skipped.
pub fn handle_level_chosen(
    mut chosen: MessageReader<LevelChosen>,
    time: Res<Time>,
    mut progress: ResMut<LevelProgress>,
    mut session: ResMut<MinigameSession>,
    mut next_state: ResMut<NextState<MenuState>>,
) {
    let mut picked = None;
    for &LevelChosen { level } in chosen.read() {
        if level >= progress.len() {
            warn!("Ignoring selection of unknown level {}", level + 1);
        } else if !progress.is_unlocked(level) {
            warn!("Ignoring selection of locked level {}", level + 1);
        } else {
            picked = Some(level);
        }
    }
    let Some(level) = picked else {
        return;
    };
    if let Err(err) = progress.select(level) {
        warn!("Ignoring level selection: {err}");
        return;
    }
    session.start(level as i32, time.elapsed_secs());
    next_state.set(MenuState::Minigame);
    info!("Starting level {} (difficulty {})", level + 1, session.difficulty);
}

/// Mirror controller lock state onto the buttons whenever it changes.
///
/// Lock state only moves `locked → unlocked`; a record that reads locked
/// never re-locks a button.
pub fn refresh_level_buttons(
    progress: Res<LevelProgress>,
    sprites: Res<LevelSprites>,
    mut buttons: Query<(&mut LevelButton, &mut ImageNode, &Children)>,
    mut labels: Query<&mut TextColor, With<LevelButtonLabel>>,
) {
    if !progress.is_changed() {
        return;
    }
    for (mut button, mut image, children) in buttons.iter_mut() {
        if button.unlocked || !progress.is_unlocked(button.id) {
            continue;
        }
        button.unlocked = true;
        image.image = sprites.handle_for(true);
        image.color = sprite_tint(true);
        for child in children.iter() {
            if let Ok(mut color) = labels.get_mut(child) {
                *color = TextColor(unlocked_label_color());
            }
        }
        debug!("Level {} unlocked", button.id + 1);
    }
}

/// Components for a freshly spawned button in its initial state.
pub fn level_button_bundle(
    id: LevelId,
    unlocked: bool,
    sprites: &LevelSprites,
    size_px: f32,
) -> impl Bundle {
    (
        Button,
        Node {
            width: Val::Px(size_px),
            height: Val::Px(size_px),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::End,
            padding: UiRect::bottom(Val::Px(6.0)),
            ..default()
        },
        ImageNode {
            image: sprites.handle_for(unlocked),
            color: sprite_tint(unlocked),
            ..default()
        },
        LevelButton::new(id, unlocked),
        Name::new(format!("Level Button {id}")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::ScoreRules;
    use bevy::ecs::message::Messages;

    fn chosen_world(levels: i32) -> (World, Schedule) {
        let mut world = World::new();
        world.insert_resource(Time::<()>::default());
        world.insert_resource(LevelProgress::new(levels, ScoreRules::default()).unwrap());
        world.insert_resource(MinigameSession::default());
        world.insert_resource(NextState::<MenuState>::default());
        world.init_resource::<Messages<LevelChosen>>();

        let mut schedule = Schedule::default();
        schedule.add_systems(handle_level_chosen);
        (world, schedule)
    }

    #[test]
    fn choosing_level_selects_it_and_starts_session() {
        let (mut world, mut schedule) = chosen_world(3);
        world.resource_mut::<LevelProgress>().evaluate(0, 0.0);
        world.resource_mut::<MinigameSession>().elapsed_secs = 30.0;
        world.write_message(LevelChosen { level: 2 });

        schedule.run(&mut world);

        assert_eq!(world.resource::<LevelProgress>().selected(), 2);
        let session = world.resource::<MinigameSession>();
        assert_eq!(session.difficulty, 2);
        assert_eq!(session.elapsed_secs, 0.0);
        assert!(matches!(
            *world.resource::<NextState<MenuState>>(),
            NextState::Pending(MenuState::Minigame)
        ));
    }

    #[test]
    fn choosing_unknown_level_is_ignored() {
        let (mut world, mut schedule) = chosen_world(2);
        world.write_message(LevelChosen { level: 9 });

        schedule.run(&mut world);

        assert_eq!(world.resource::<LevelProgress>().selected(), 0);
        assert!(matches!(
            *world.resource::<NextState<MenuState>>(),
            NextState::Unchanged
        ));
    }

    #[test]
    fn choosing_locked_level_does_not_start_minigame() {
        let (mut world, mut schedule) = chosen_world(3);
        world.write_message(LevelChosen { level: 1 });

        schedule.run(&mut world);

        assert!(matches!(
            *world.resource::<NextState<MenuState>>(),
            NextState::Unchanged
        ));
    }

    #[test]
    fn last_unlocked_press_wins_over_later_locked_one() {
        let (mut world, mut schedule) = chosen_world(4);
        world.resource_mut::<LevelProgress>().evaluate(0, 0.0);
        world.write_message(LevelChosen { level: 1 });
        world.write_message(LevelChosen { level: 3 });
        world.write_message(LevelChosen { level: 7 });

        schedule.run(&mut world);

        assert_eq!(world.resource::<LevelProgress>().selected(), 1);
        assert_eq!(world.resource::<MinigameSession>().difficulty, 1);
        assert!(matches!(
            *world.resource::<NextState<MenuState>>(),
            NextState::Pending(MenuState::Minigame)
        ));
    }

    #[test]
    fn refresh_unlocks_buttons_but_never_relocks() {
        let mut world = World::new();
        let mut progress = LevelProgress::new(4, ScoreRules::default()).unwrap();
        world.insert_resource(LevelSprites::default());

        let spawn_button = |world: &mut World, id: LevelId, unlocked: bool| {
            let label = world.spawn((Text::new("x"), LevelButtonLabel)).id();
            let mut button = world.spawn((LevelButton::new(id, unlocked), ImageNode::default()));
            button.add_child(label);
            button.id()
        };
        let b0 = spawn_button(&mut world, 0, true);
        let b1 = spawn_button(&mut world, 1, false);
        let b2 = spawn_button(&mut world, 2, false);
        // Already open although its record still reads locked.
        let b3 = spawn_button(&mut world, 3, true);

        progress.evaluate(0, 2.0);
        world.insert_resource(progress);

        let mut schedule = Schedule::default();
        schedule.add_systems(refresh_level_buttons);
        schedule.run(&mut world);

        assert!(world.get::<LevelButton>(b0).unwrap().unlocked);
        assert!(world.get::<LevelButton>(b1).unwrap().unlocked);
        assert!(!world.get::<LevelButton>(b2).unwrap().unlocked);
        assert!(!world.resource::<LevelProgress>().is_unlocked(3));
        assert!(world.get::<LevelButton>(b3).unwrap().unlocked);
    }
}
