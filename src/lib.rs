//! Catfall - a top-down arcade shooter: Henny the steel rabbit vs the angry cats
//!
//! Core modules:
//! - `sim`: Deterministic per-frame simulation (entities, spawning, collisions, game state)
//! - `settings`: Immutable game configuration, loaded from JSON and validated up front
//! - `error`: Construction-time configuration errors
//!
//! Windowing, input polling, image loading and text rendering belong to the
//! presentation layer. It feeds `sim::TickInput`s in and reads `sim::Snapshot`s out.

pub mod error;
pub mod settings;
pub mod sim;

pub use error::SettingsError;
pub use settings::Settings;

/// Game configuration defaults
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 1024.0;
    pub const SCREEN_HEIGHT: f32 = 768.0;
    /// Presentation frame rate target (pacing only, the sim is frame-stepped)
    pub const FPS: u32 = 60;

    /// Enemy defaults
    pub const DEFAULT_OBJECT_SIZE: f32 = 40.0;
    pub const DEFAULT_OBJECT_SPEED: f32 = 4.0;
    /// Number of angry cat images an enemy can be drawn with
    pub const ENEMY_SPRITE_VARIANTS: u8 = 4;

    /// Bullet defaults (bullets travel upward)
    pub const DEFAULT_BULLET_SIZE: f32 = 30.0;
    pub const DEFAULT_BULLET_SPEED: f32 = 8.0;
    /// Health of a penetrating bullet - enough to outlive any session
    pub const PENETRATING_BULLET_HEALTH: u32 = 9999;

    /// Player defaults
    pub const DEFAULT_PLAYER_SIZE: f32 = 40.0;
    /// Gap between the player's start position and the playfield bottom
    pub const PLAYER_BOTTOM_MARGIN: f32 = 10.0;
    /// Per-frame movement while a direction key is held
    pub const PLAYER_STEP_X: f32 = 6.0;
    pub const PLAYER_STEP_Y: f32 = 4.0;

    /// Boss defaults
    pub const BOSS_OBJECT_SIZE: f32 = 400.0;
    pub const BOSS_OBJECT_HEALTH: u32 = 20;
    /// Score whose multiples (strictly above it) bring in a boss
    pub const BOSS_START_SCORE: u64 = 400;
    /// Boss speed relative to the base object speed
    pub const BOSS_SPEED_FACTOR: f32 = 0.5;

    /// Frames between interval enemy spawns
    pub const SPAWN_INTERVAL: u32 = 5;
    /// Frames over which the enemy speed spread grows by one unit
    pub const DIFFICULTY_RAMP_FRAMES: f32 = 200.0;
}
