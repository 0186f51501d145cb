use bevy::prelude::*;

pub(super) fn title_color() -> Color {
    Color::srgb(0.95, 0.88, 0.45)
}
pub(super) fn subtitle_color() -> Color {
    Color::srgb(0.55, 0.55, 0.65)
}
pub(super) fn hint_color() -> Color {
    Color::srgb(0.28, 0.28, 0.35)
}

pub(super) fn correct_bg() -> Color {
    Color::srgb(0.08, 0.36, 0.14)
}
pub(super) fn correct_border() -> Color {
    Color::srgb(0.18, 0.72, 0.28)
}
pub(super) fn correct_text() -> Color {
    Color::srgb(0.75, 1.0, 0.80)
}
pub(super) fn wrong_bg() -> Color {
    Color::srgb(0.28, 0.06, 0.06)
}
pub(super) fn wrong_border() -> Color {
    Color::srgb(0.60, 0.12, 0.12)
}
pub(super) fn wrong_text() -> Color {
    Color::srgb(1.0, 0.65, 0.65)
}
pub(super) fn back_bg() -> Color {
    Color::srgb(0.12, 0.12, 0.18)
}
pub(super) fn back_border() -> Color {
    Color::srgb(0.30, 0.30, 0.46)
}
pub(super) fn back_text() -> Color {
    Color::srgb(0.55, 0.55, 0.70)
}

pub(super) fn panel_bg() -> Color {
    Color::srgb(0.06, 0.09, 0.18)
}
pub(super) fn panel_border() -> Color {
    Color::srgb(0.22, 0.38, 0.72)
}
pub(super) fn bar_track() -> Color {
    Color::srgb(0.10, 0.10, 0.16)
}
pub(super) fn bar_fill() -> Color {
    Color::srgb(0.18, 0.72, 0.28)
}

pub(super) fn spacer(parent: &mut ChildSpawnerCommands<'_>, px: f32) {
    parent.spawn(Node {
        height: Val::Px(px),
        ..default()
    });
}

/// Spawn a bordered text button carrying `marker`.
pub(super) fn text_button(
    parent: &mut ChildSpawnerCommands<'_>,
    label: &str,
    (bg, border, text): (Color, Color, Color),
    marker: impl Bundle,
) {
    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(200.0),
                height: Val::Px(48.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(bg),
            BorderColor::all(border),
            marker,
        ))
        .with_children(|btn| {
            btn.spawn((
                Text::new(label),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(text),
            ));
        });
}
