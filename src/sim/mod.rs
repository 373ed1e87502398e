//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per rendered frame, run to completion
//! - Injected RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{defeated_boss, player_contact, resolve_bullet_hits};
pub use entity::{Entity, EntityKind, Sprite, boxes_overlap};
pub use snapshot::{EntityView, Snapshot};
pub use spawner::{boss_due, enemy_speed};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, step, tick};
