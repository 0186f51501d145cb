use bevy::prelude::*;

/// Setup camera for 2D UI rendering.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn((Name::new("Camera"), Camera2d));
    info!("[SETUP] Camera spawned");
}
