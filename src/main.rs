use bevy::prelude::*;
use bevy::window::WindowResolution;

use menu_progression::config;
use menu_progression::menu::MenuPlugin;
use menu_progression::progress::ProgressionPlugin;

fn main() -> AppExit {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Level Select".into(),
            resolution: WindowResolution::new(960, 680),
            ..Default::default()
        }),
        ..Default::default()
    }))
    .insert_resource(ClearColor(Color::BLACK))
    .add_plugins((ProgressionPlugin, MenuPlugin))
    // ProgressionPlugin seeds MenuConfig with compiled defaults.
    .add_systems(Startup, config::load_menu_config);

    app.run()
}
