//! Shared locked/unlocked sprite handles for level buttons.
//!
//! Loaded once at startup from the paths in [`MenuConfig`]; every button
//! clones the same two handles.  [`verify_level_sprites`] polls the asset
//! server until both are loaded and terminates the app if either fails.

use crate::config::MenuConfig;
use crate::error::{ProgressError, ProgressResult};
use bevy::prelude::*;
use bevy_asset::{AssetServer, Handle, LoadState};

/// Which of the two level sprites a handle refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Locked,
    Unlocked,
}

impl SpriteKind {
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            SpriteKind::Locked => "locked",
            SpriteKind::Unlocked => "unlocked",
        }
    }
}

/// Sprite cache resource.
#[derive(Resource, Debug, Clone, Default)]
pub struct LevelSprites {
    pub locked: Handle<Image>,
    pub unlocked: Handle<Image>,
    pub locked_path: String,
    pub unlocked_path: String,
    /// Set once both handles report loaded.
    pub verified: bool,
}

impl LevelSprites {
    pub fn handle_for(&self, unlocked: bool) -> Handle<Image> {
        if unlocked {
            self.unlocked.clone()
        } else {
            self.locked.clone()
        }
    }

    fn path(&self, kind: SpriteKind) -> &str {
        match kind {
            SpriteKind::Locked => &self.locked_path,
            SpriteKind::Unlocked => &self.unlocked_path,
        }
    }

    /// Error for the first sprite whose load failed, if any.
    pub fn first_failure(
        &self,
        states: [(SpriteKind, &LoadState); 2],
    ) -> Option<ProgressError> {
        states.into_iter().find_map(|(kind, state)| {
            matches!(state, LoadState::Failed(_)).then(|| ProgressError::SpriteLoad {
                name: kind.label(),
                path: self.path(kind).to_string(),
            })
        })
    }

    /// Fold the current load states into `verified`.
    ///
    /// Marks the cache verified once both sprites are loaded, or as soon as
    /// either fails, in which case the failure is returned exactly once.
    pub fn check_load_states(
        &mut self,
        locked: &LoadState,
        unlocked: &LoadState,
    ) -> ProgressResult<()> {
        if self.verified {
            return Ok(());
        }
        if let Some(err) = self.first_failure([
            (SpriteKind::Locked, locked),
            (SpriteKind::Unlocked, unlocked),
        ]) {
            self.verified = true;
            return Err(err);
        }
        if locked.is_loaded() && unlocked.is_loaded() {
            self.verified = true;
            info!("Level sprites loaded");
        }
        Ok(())
    }
}

/// Startup system: request both sprites from the asset server.
pub fn load_level_sprites(
    mut commands: Commands,
    config: Res<MenuConfig>,
    asset_server: Res<AssetServer>,
) {
    commands.insert_resource(LevelSprites {
        locked: asset_server.load(config.locked_sprite.clone()),
        unlocked: asset_server.load(config.unlocked_sprite.clone()),
        locked_path: config.locked_sprite.clone(),
        unlocked_path: config.unlocked_sprite.clone(),
        verified: false,
    });
    info!(
        "Requested level sprites '{}' and '{}'",
        config.locked_sprite, config.unlocked_sprite
    );
}

/// Poll sprite load state until both are loaded; exit if either fails.
pub fn verify_level_sprites(
    mut sprites: ResMut<LevelSprites>,
    asset_server: Res<AssetServer>,
    mut exit: MessageWriter<AppExit>,
) {
    if sprites.verified {
        return;
    }
    let locked = asset_server.load_state(&sprites.locked);
    let unlocked = asset_server.load_state(&sprites.unlocked);

    if let Err(err) = sprites.check_load_states(&locked, &unlocked) {
        error!("LevelSprites: {err}");
        info!("Application quitting...");
        exit.write(AppExit::error());
    }
}
