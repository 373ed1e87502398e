//! Game state and the session state machine
//!
//! All state that must be captured for replay lives here. The presentation
//! layer only reaches it through the input commands below and `snapshot()`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use crate::error::SettingsError;
use crate::settings::Settings;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// A boss was defeated (terminal)
    Won,
    /// The player was struck (terminal)
    Lost,
}

impl GamePhase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// Something that happened during the last step (for sound/effects)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    EnemySpawned { id: u32 },
    BossSpawned { id: u32 },
    EnemyDestroyed { id: u32 },
    BossDefeated { id: u32 },
    PlayerStruck { by: u32 },
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Configuration the session was built from
    pub settings: Settings,
    /// The player's rabbit
    pub player: Entity,
    /// Live enemies and bosses, in spawn order
    pub enemies: Vec<Entity>,
    /// Live bullets, in firing order
    pub bullets: Vec<Entity>,
    /// Frames survived
    pub score: u64,
    /// Frames since the last interval spawn
    pub spawn_timer: u32,
    /// Frames simulated since the session started (drives the speed spread)
    pub frame_counter: u64,
    pub phase: GamePhase,
    /// Events from the most recent step (not gameplay-affecting)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh session, rejecting settings that would corrupt layout
    pub fn new(settings: Settings) -> Result<Self, SettingsError> {
        settings.validate()?;
        let state = Self::fresh(settings);
        log::info!(
            "New session on a {}x{} playfield",
            state.settings.playfield_width,
            state.settings.playfield_height
        );
        Ok(state)
    }

    fn fresh(settings: Settings) -> Self {
        let (x, y) = settings.player_start();
        let player = Entity::player(1, Vec2::new(x, y), settings.player_size);
        Self {
            settings,
            player,
            enemies: Vec::new(),
            bullets: Vec::new(),
            score: 0,
            spawn_timer: 0,
            frame_counter: 0,
            phase: GamePhase::Playing,
            events: Vec::new(),
            next_id: 2,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Restart after a win or loss. Ignored while playing.
    pub fn reset(&mut self) -> bool {
        if !self.phase.is_terminal() {
            log::debug!("Reset ignored while playing");
            return false;
        }
        log::info!("Session reset ({:?} with score {})", self.phase, self.score);
        *self = Self::fresh(self.settings.clone());
        true
    }

    /// Restart on a new playfield (e.g. after a fullscreen toggle), in any phase
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), SettingsError> {
        let settings = self.settings.with_playfield(width, height);
        settings.validate()?;
        log::info!("Playfield resized to {width}x{height}, restarting");
        *self = Self::fresh(settings);
        Ok(())
    }

    /// Move the player by a delta, clamped to the playfield
    pub fn move_player(&mut self, dx: f32, dy: f32) {
        if self.phase.is_terminal() {
            return;
        }
        let max_x = self.settings.playfield_width - self.player.size;
        let max_y = self.settings.playfield_height - self.player.size;
        self.player.pos.x = (self.player.pos.x + dx).clamp(0.0, max_x);
        self.player.pos.y = (self.player.pos.y + dy).clamp(0.0, max_y);
    }

    /// Fire a bullet from the player's position. Ignored unless playing.
    pub fn fire_bullet(&mut self, penetrating: bool) -> Option<u32> {
        if self.phase.is_terminal() {
            log::debug!("Fire ignored in {:?}", self.phase);
            return None;
        }
        let id = self.next_entity_id();
        self.bullets.push(Entity::bullet(
            id,
            self.player.pos,
            self.settings.bullet_size,
            self.settings.bullet_speed,
            penetrating,
            self.settings.penetrating_bullet_health,
        ));
        Some(id)
    }

    /// Move every enemy, boss and bullet by its own velocity
    pub fn advance_entities(&mut self) {
        for enemy in &mut self.enemies {
            enemy.advance();
        }
        for bullet in &mut self.bullets {
            bullet.advance();
        }
    }

    /// Drop entities that left the playfield: anything whose top edge reached
    /// the bottom, and bullets that climbed past the spawn band above the top
    pub fn purge_offscreen(&mut self) {
        let bottom = self.settings.playfield_height;
        // Enemies and bosses spawn with their top edge at -size
        let ceiling = -self.settings.boss_size.max(self.settings.object_size);
        self.enemies.retain(|e| e.pos.y < bottom);
        self.bullets
            .retain(|b| b.pos.y < bottom && b.bottom() >= ceiling);
    }

    /// Drop entities whose health ran out
    pub fn purge_dead(&mut self) {
        for enemy in self.enemies.iter().filter(|e| e.is_dead()) {
            self.events.push(GameEvent::EnemyDestroyed { id: enemy.id });
        }
        self.enemies.retain(|e| !e.is_dead());
        self.bullets.retain(|b| !b.is_dead());
        debug_assert!(self.enemies.iter().chain(&self.bullets).all(|e| e.health > 0));
    }

    /// Take the events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
