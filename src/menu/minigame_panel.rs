use super::*;

/// Minigame overlay lifecycle and its buttons.
///
/// Added by [`MenuPlugin`]; needs only [`crate::progress::ProgressionPlugin`]
/// and no asset server, so it also runs headless.
pub struct MinigamePanelPlugin;

impl Plugin for MinigamePanelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(MenuState::Minigame), setup_minigame_panel)
            .add_systems(OnExit(MenuState::Minigame), cleanup_minigame_panel)
            .add_systems(
                Update,
                (minigame_button_system, update_minigame_texts)
                    .before(apply_minigame_outcome)
                    .run_if(in_state(MenuState::Minigame).and(resource_exists::<LevelProgress>)),
            );
    }
}

/// Spawn the minigame overlay centred over the level panel.
///
/// The overlay stands in for a real minigame: it shows the attempt timer and
/// lets the player report the outcome directly.
pub fn setup_minigame_panel(
    mut commands: Commands,
    progress: Res<LevelProgress>,
    session: Res<MinigameSession>,
    config: Res<MenuConfig>,
) {
    let level = progress.selected();

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.82)),
            ZIndex(300),
            MinigameRoot,
        ))
        .with_children(|overlay| {
            overlay
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        padding: UiRect::all(Val::Px(40.0)),
                        row_gap: Val::Px(12.0),
                        border: UiRect::all(Val::Px(2.0)),
                        min_width: Val::Px(320.0),
                        ..default()
                    },
                    BackgroundColor(panel_bg()),
                    BorderColor::all(panel_border()),
                ))
                .with_children(|card| {
                    card.spawn((
                        Text::new(format!(
                            "{} {}",
                            config.level_label_prefix.to_uppercase(),
                            level + 1
                        )),
                        TextFont {
                            font_size: 40.0,
                            ..default()
                        },
                        TextColor(title_color()),
                    ));

                    card.spawn((
                        Text::new(format!("Difficulty {}", session.difficulty)),
                        TextFont {
                            font_size: 16.0,
                            ..default()
                        },
                        TextColor(subtitle_color()),
                    ));

                    card.spawn((
                        Text::new(session.display()),
                        TextFont {
                            font_size: 32.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                        MinigameTimerText,
                    ));

                    card.spawn((
                        Text::new(retry_label(progress.retries(level))),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(subtitle_color()),
                        MinigameRetryText,
                    ));

                    spacer(card, 8.0);

                    text_button(
                        card,
                        "CORRECT",
                        (correct_bg(), correct_border(), correct_text()),
                        MinigameCorrectButton,
                    );
                    text_button(
                        card,
                        "WRONG",
                        (wrong_bg(), wrong_border(), wrong_text()),
                        MinigameWrongButton,
                    );
                    text_button(
                        card,
                        "BACK",
                        (back_bg(), back_border(), back_text()),
                        MinigameBackButton,
                    );
                });
        });
}

fn retry_label(retries: u32) -> String {
    format!("Retries: {retries}")
}

/// Despawn the minigame overlay.
pub fn cleanup_minigame_panel(mut commands: Commands, query: Query<Entity, With<MinigameRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Translate overlay button presses into [`MinigameOutcome`] messages.
#[allow(clippy::type_complexity)]
pub fn minigame_button_system(
    buttons: Query<
        (
            &Interaction,
            Has<MinigameCorrectButton>,
            Has<MinigameWrongButton>,
            Has<MinigameBackButton>,
        ),
        Changed<Interaction>,
    >,
    mut outcomes: MessageWriter<MinigameOutcome>,
) {
    for (interaction, correct, wrong, back) in buttons.iter() {
        if *interaction != Interaction::Pressed {
            continue;
        }
        let outcome = if correct {
            MinigameOutcome::Correct
        } else if wrong {
            MinigameOutcome::Wrong
        } else if back {
            MinigameOutcome::Abandon
        } else {
            continue;
        };
        outcomes.write(outcome);
    }
}

/// Refresh the timer and retry readouts.
pub fn update_minigame_texts(
    session: Res<MinigameSession>,
    progress: Res<LevelProgress>,
    mut timer_text: Query<&mut Text, (With<MinigameTimerText>, Without<MinigameRetryText>)>,
    mut retry_text: Query<&mut Text, (With<MinigameRetryText>, Without<MinigameTimerText>)>,
) {
    if session.is_changed() {
        for mut text in timer_text.iter_mut() {
            *text = Text::new(session.display());
        }
    }
    if progress.is_changed() {
        let retries = progress.retries(progress.selected());
        for mut text in retry_text.iter_mut() {
            *text = Text::new(retry_label(retries));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::ScoreRules;

    #[test]
    fn overlay_shows_selected_level_and_cleans_up() {
        let mut world = World::new();
        world.insert_resource(MenuConfig::default());
        let mut progress = LevelProgress::new(3, ScoreRules::default()).unwrap();
        progress.select(0).unwrap();
        progress.record_failure(0);
        world.insert_resource(progress);
        world.insert_resource(MinigameSession {
            difficulty: 0,
            started_at_secs: 0.0,
            elapsed_secs: 65.0,
        });

        let mut setup = Schedule::default();
        setup.add_systems(setup_minigame_panel);
        setup.run(&mut world);

        let timer = world
            .query_filtered::<&Text, With<MinigameTimerText>>()
            .single(&world)
            .unwrap();
        assert_eq!(timer.0, "01:05");
        let retries = world
            .query_filtered::<&Text, With<MinigameRetryText>>()
            .single(&world)
            .unwrap();
        assert_eq!(retries.0, "Retries: 1");

        let mut cleanup = Schedule::default();
        cleanup.add_systems(cleanup_minigame_panel);
        cleanup.run(&mut world);

        assert_eq!(
            world
                .query_filtered::<(), With<MinigameRoot>>()
                .iter(&world)
                .count(),
            0
        );
        assert_eq!(
            world
                .query_filtered::<(), With<MinigameTimerText>>()
                .iter(&world)
                .count(),
            0
        );
    }
}
