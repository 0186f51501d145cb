use super::*;

/// Spawn the level-select screen: title, level panel, and progress bar.
///
/// Layout:
/// ```text
/// ┌─────────────────────────────────────────────┐
/// │               SELECT LEVEL                  │
/// │   ┌───────────────────────────────────┐     │
/// │   │ [L1] [L2] [L3] [L4] [L5]          │     │
/// │   │ [L6] [L7] ...                     │     │
/// │   └───────────────────────────────────┘     │
/// │   [██████████░░░░░░░░░░░░░░░░░░░░░░░]       │
/// │            Progress: 2 / 9                  │
/// └─────────────────────────────────────────────┘
/// ```
///
/// Skips spawning if startup already failed (no progress or sprites).
pub fn spawn_level_select_menu(
    mut commands: Commands,
    config: Res<MenuConfig>,
    progress: Option<Res<LevelProgress>>,
    sprites: Option<Res<LevelSprites>>,
) {
    let (Some(progress), Some(sprites)) = (progress, sprites) else {
        return;
    };
    let bar = ProgressBar {
        value: progress.indicator() as f32,
        max: progress.indicator_max() as f32,
    };

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::BLACK),
            LevelSelectRoot,
        ))
        .with_children(|root| {
            root.spawn((
                Text::new("SELECT LEVEL"),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(title_color()),
            ));

            spacer(root, 24.0);

            // ── Level panel ───────────────────────────────────────────────────
            root.spawn((
                Node {
                    width: Val::Px(PROGRESS_BAR_WIDTH + 40.0),
                    flex_direction: FlexDirection::Row,
                    flex_wrap: FlexWrap::Wrap,
                    justify_content: JustifyContent::Center,
                    column_gap: Val::Px(12.0),
                    row_gap: Val::Px(12.0),
                    padding: UiRect::all(Val::Px(20.0)),
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BackgroundColor(panel_bg()),
                BorderColor::all(panel_border()),
                LevelPanel,
            ))
            .with_children(|panel| {
                for record in progress.levels() {
                    let label_color = if record.unlocked {
                        unlocked_label_color()
                    } else {
                        locked_label_color()
                    };
                    panel
                        .spawn(level_button_bundle(
                            record.id,
                            record.unlocked,
                            &sprites,
                            LEVEL_BUTTON_SIZE,
                        ))
                        .with_children(|btn| {
                            btn.spawn((
                                Text::new(format!(
                                    "{} {}",
                                    config.level_label_prefix,
                                    record.id + 1
                                )),
                                TextFont {
                                    font_size: config.label_font_size,
                                    ..default()
                                },
                                TextColor(label_color),
                                LevelButtonLabel,
                            ));
                        });
                }
            });

            spacer(root, 24.0);

            // ── Progress bar ──────────────────────────────────────────────────
            root.spawn((
                Node {
                    width: Val::Px(PROGRESS_BAR_WIDTH),
                    height: Val::Px(14.0),
                    border: UiRect::all(Val::Px(1.0)),
                    ..default()
                },
                BackgroundColor(bar_track()),
                BorderColor::all(panel_border()),
                bar,
            ))
            .with_children(|track| {
                track.spawn((
                    Node {
                        width: Val::Percent(bar.fill_percent()),
                        height: Val::Percent(100.0),
                        ..default()
                    },
                    BackgroundColor(bar_fill()),
                    ProgressBarFill,
                ));
            });

            spacer(root, 8.0);

            root.spawn((
                Text::new(progress_label(&bar)),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(subtitle_color()),
                ProgressBarLabel,
            ));

            spacer(root, 24.0);

            root.spawn((
                Text::new("Pass a level to unlock the next one"),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(hint_color()),
            ));
        });

    info!("Level select spawned with {} buttons", progress.len());
}

fn progress_label(bar: &ProgressBar) -> String {
    format!("Progress: {} / {}", bar.value as u32, bar.max as u32)
}

/// Move the progress indicator to the controller's value when it changes.
pub fn refresh_progress_bar(
    progress: Res<LevelProgress>,
    mut bars: Query<(&mut ProgressBar, &Children)>,
    mut fills: Query<&mut Node, With<ProgressBarFill>>,
    mut labels: Query<&mut Text, With<ProgressBarLabel>>,
) {
    if !progress.is_changed() {
        return;
    }
    for (mut bar, children) in bars.iter_mut() {
        bar.value = progress.indicator() as f32;
        bar.max = progress.indicator_max() as f32;
        for child in children.iter() {
            if let Ok(mut node) = fills.get_mut(child) {
                node.width = Val::Percent(bar.fill_percent());
            }
        }
        for mut text in labels.iter_mut() {
            *text = Text::new(progress_label(&bar));
        }
    }
}

/// First missing required widget, given how many of each were found.
pub fn missing_widget(
    panels: usize,
    bars: usize,
    buttons: usize,
    expected_buttons: usize,
) -> Option<ProgressError> {
    let widget = if panels == 0 {
        "level panel"
    } else if bars == 0 {
        "progress bar"
    } else if buttons < expected_buttons {
        "level button"
    } else {
        return None;
    };
    Some(ProgressError::MissingWidget { widget })
}

/// Exit if the level-select screen is missing any required widget.
pub fn verify_menu_widgets(
    progress: Option<Res<LevelProgress>>,
    panels: Query<(), With<LevelPanel>>,
    bars: Query<(), With<ProgressBar>>,
    buttons: Query<(), With<LevelButton>>,
    mut exit: MessageWriter<AppExit>,
) {
    // Startup already failed and reported.
    let Some(progress) = progress else {
        return;
    };
    if let Some(err) = missing_widget(
        panels.iter().count(),
        bars.iter().count(),
        buttons.iter().count(),
        progress.len(),
    ) {
        error!("MenuPlugin: {err}");
        info!("Application quitting...");
        exit.write(AppExit::error());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::ScoreRules;

    #[test]
    fn fill_percent_tracks_value_over_max() {
        let bar = ProgressBar {
            value: 3.0,
            max: 6.0,
        };
        assert_eq!(bar.fill_percent(), 50.0);
    }

    #[test]
    fn single_level_bar_is_full() {
        let bar = ProgressBar {
            value: 0.0,
            max: 0.0,
        };
        assert_eq!(bar.fill_percent(), 100.0);
    }

    #[test]
    fn missing_widgets_are_reported_in_order() {
        assert!(missing_widget(1, 1, 3, 3).is_none());
        assert!(matches!(
            missing_widget(0, 0, 0, 3),
            Some(ProgressError::MissingWidget { widget: "level panel" })
        ));
        assert!(matches!(
            missing_widget(1, 0, 3, 3),
            Some(ProgressError::MissingWidget { widget: "progress bar" })
        ));
        assert!(matches!(
            missing_widget(1, 1, 2, 3),
            Some(ProgressError::MissingWidget { widget: "level button" })
        ));
    }

    #[test]
    fn spawned_menu_passes_widget_check_and_buttons_follow_records() {
        let mut world = World::new();
        world.insert_resource(MenuConfig {
            number_of_levels: 4,
            ..default()
        });
        world.insert_resource(LevelProgress::new(4, ScoreRules::default()).unwrap());
        world.insert_resource(LevelSprites::default());
        world.init_resource::<bevy::ecs::message::Messages<AppExit>>();

        let mut schedule = Schedule::default();
        schedule.add_systems((spawn_level_select_menu, verify_menu_widgets).chain());
        schedule.run(&mut world);

        let mut buttons: Vec<LevelButton> = world
            .query::<&LevelButton>()
            .iter(&world)
            .copied()
            .collect();
        buttons.sort_by_key(|b| b.id);
        let ids: Vec<_> = buttons.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        assert!(buttons[0].unlocked);
        assert!(buttons[1..].iter().all(|b| !b.unlocked));
        assert!(world
            .resource::<bevy::ecs::message::Messages<AppExit>>()
            .is_empty());
    }

    #[test]
    fn progress_bar_follows_indicator() {
        let mut world = World::new();
        world.insert_resource(MenuConfig::default());
        world.insert_resource(LevelProgress::new(5, ScoreRules::default()).unwrap());
        world.insert_resource(LevelSprites::default());

        let mut spawn = Schedule::default();
        spawn.add_systems(spawn_level_select_menu);
        spawn.run(&mut world);

        world.resource_mut::<LevelProgress>().evaluate(0, 0.0);

        let mut refresh = Schedule::default();
        refresh.add_systems(refresh_progress_bar);
        refresh.run(&mut world);

        let bar = *world.query::<&ProgressBar>().single(&world).unwrap();
        assert_eq!(bar.value, 2.0);
        assert_eq!(bar.max, 4.0);
        let label = world
            .query_filtered::<&Text, With<ProgressBarLabel>>()
            .single(&world)
            .unwrap();
        assert_eq!(label.0, "Progress: 2 / 4");
    }
}
