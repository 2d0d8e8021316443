//! Engine configuration fixed at construction time.
//!
//! There are no setters: a running game cannot be reconfigured, a new
//! instance has to be built instead.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{DomainError, SceneKey};

/// Logical canvas size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RendererMode {
    /// Let the engine pick WebGL and fall back to canvas
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleMode {
    /// Scale to fit the parent container, keeping the aspect ratio
    Fit,
}

/// Arcade physics gravity in pixels per second squared.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gravity {
    pub x: f32,
    pub y: f32,
}

/// Only the scene list is free. Every other field is fixed, so a serialized
/// config is accepted only when those fields are absent or hold the fixed
/// values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GameConfigRecord")]
pub struct GameConfig {
    viewport: Viewport,
    renderer: RendererMode,
    scale_mode: ScaleMode,
    pixel_art: bool,
    gravity: Gravity,
    physics_debug: bool,
    scenes: Vec<SceneKey>,
}

impl GameConfig {
    pub const VIEWPORT: Viewport = Viewport {
        width: 1024,
        height: 768,
    };
    pub const GRAVITY: Gravity = Gravity { x: 0.0, y: 300.0 };

    /// Standard configuration for the given ordered scene list.
    ///
    /// The first scene is the one started when the game boots.
    pub fn new(scenes: Vec<SceneKey>) -> Result<Self, DomainError> {
        if scenes.is_empty() {
            return Err(DomainError::validation(
                "Game config needs at least one scene",
            ));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = scenes.iter().find(|key| !seen.insert(key.as_str())) {
            return Err(DomainError::validation(format!(
                "Scene '{dup}' is registered twice"
            )));
        }

        Ok(Self {
            viewport: Self::VIEWPORT,
            renderer: RendererMode::Auto,
            scale_mode: ScaleMode::Fit,
            pixel_art: true,
            gravity: Self::GRAVITY,
            physics_debug: false,
            scenes,
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn renderer(&self) -> RendererMode {
        self.renderer
    }

    pub fn scale_mode(&self) -> ScaleMode {
        self.scale_mode
    }

    pub fn pixel_art(&self) -> bool {
        self.pixel_art
    }

    pub fn gravity(&self) -> Gravity {
        self.gravity
    }

    pub fn physics_debug(&self) -> bool {
        self.physics_debug
    }

    pub fn scenes(&self) -> &[SceneKey] {
        &self.scenes
    }

    pub fn first_scene(&self) -> &SceneKey {
        // Non-empty is checked in `new`, the only constructor
        &self.scenes[0]
    }
}

/// Wire form of [`GameConfig`], checked by `TryFrom` before use.
#[derive(Debug, Deserialize)]
struct GameConfigRecord {
    scenes: Vec<SceneKey>,
    #[serde(default)]
    viewport: Option<Viewport>,
    #[serde(default)]
    renderer: Option<RendererMode>,
    #[serde(default)]
    scale_mode: Option<ScaleMode>,
    #[serde(default)]
    pixel_art: Option<bool>,
    #[serde(default)]
    gravity: Option<Gravity>,
    #[serde(default)]
    physics_debug: Option<bool>,
}

fn ensure_fixed<T: PartialEq + fmt::Debug>(
    field: &str,
    given: Option<T>,
    fixed: T,
) -> Result<(), DomainError> {
    match given {
        Some(value) if value != fixed => Err(DomainError::validation(format!(
            "Game config field '{field}' is fixed to {fixed:?}, got {value:?}"
        ))),
        _ => Ok(()),
    }
}

impl TryFrom<GameConfigRecord> for GameConfig {
    type Error = DomainError;

    fn try_from(record: GameConfigRecord) -> Result<Self, Self::Error> {
        let config = Self::new(record.scenes)?;
        ensure_fixed("viewport", record.viewport, config.viewport)?;
        ensure_fixed("renderer", record.renderer, config.renderer)?;
        ensure_fixed("scale_mode", record.scale_mode, config.scale_mode)?;
        ensure_fixed("pixel_art", record.pixel_art, config.pixel_art)?;
        ensure_fixed("gravity", record.gravity, config.gravity)?;
        ensure_fixed("physics_debug", record.physics_debug, config.physics_debug)?;
        Ok(config)
    }
}
