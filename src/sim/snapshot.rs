//! Read-only view of a session for rendering

use serde::{Deserialize, Serialize};

use super::entity::{Entity, Sprite};
use super::state::{GamePhase, GameState};

/// Where and how to draw one entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub sprite: Sprite,
}

impl From<&Entity> for EntityView {
    fn from(entity: &Entity) -> Self {
        Self {
            id: entity.id,
            x: entity.pos.x,
            y: entity.pos.y,
            size: entity.size,
            sprite: entity.sprite,
        }
    }
}

/// Everything the presentation layer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub player: EntityView,
    /// Enemies and bosses, in spawn order
    pub enemies: Vec<EntityView>,
    /// Bullets, in firing order
    pub bullets: Vec<EntityView>,
    pub score: u64,
    pub phase: GamePhase,
    /// Show the end-of-game overlay
    pub game_over: bool,
    /// "YOU WIN!" rather than "You lost"
    pub won: bool,
}

impl GameState {
    /// Consistent post-step view of the session
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player: EntityView::from(&self.player),
            enemies: self.enemies.iter().map(EntityView::from).collect(),
            bullets: self.bullets.iter().map(EntityView::from).collect(),
            score: self.score,
            phase: self.phase,
            game_over: self.phase.is_terminal(),
            won: self.phase == GamePhase::Won,
        }
    }
}
