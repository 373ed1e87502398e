//! Per-frame simulation step
//!
//! Core game loop that advances the session deterministically, one frame at a time.

use glam::Vec2;
use rand::Rng;

use super::collision::{defeated_boss, player_contact, resolve_bullet_hits};
use super::spawner;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::{PLAYER_STEP_X, PLAYER_STEP_Y};

/// Input commands for a single frame (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Player movement delta, clamped to the playfield
    pub move_delta: Vec2,
    /// Fire a regular bullet (space)
    pub fire: bool,
    /// Fire a penetrating bullet (x)
    pub fire_penetrating: bool,
    /// Restart after a win or loss (r)
    pub reset: bool,
    /// New playfield size after a fullscreen toggle; restarts in any phase
    pub resize: Option<(f32, f32)>,
}

impl TickInput {
    /// Movement from held direction keys, at the standard per-frame steps
    pub fn from_held(left: bool, right: bool, up: bool, down: bool) -> Self {
        let mut delta = Vec2::ZERO;
        if left {
            delta.x -= PLAYER_STEP_X;
        }
        if right {
            delta.x += PLAYER_STEP_X;
        }
        if up {
            delta.y -= PLAYER_STEP_Y;
        }
        if down {
            delta.y += PLAYER_STEP_Y;
        }
        Self {
            move_delta: delta,
            ..Default::default()
        }
    }
}

/// Apply one frame of input, then advance the simulation
pub fn step(state: &mut GameState, input: &TickInput, rng: &mut impl Rng) {
    state.events.clear();

    if let Some((width, height)) = input.resize {
        if let Err(err) = state.resize(width, height) {
            log::warn!("Resize to {width}x{height} rejected: {err}");
        }
    }
    if input.reset {
        state.reset();
    }
    if input.move_delta != Vec2::ZERO {
        state.move_player(input.move_delta.x, input.move_delta.y);
    }
    if input.fire {
        state.fire_bullet(false);
    }
    if input.fire_penetrating {
        state.fire_bullet(true);
    }

    tick(state, rng);
}

/// Advance the session by one frame
pub fn tick(state: &mut GameState, rng: &mut impl Rng) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.spawn_timer += 1;
    state.frame_counter += 1;

    spawner::run(state, rng);

    state.advance_entities();
    state.purge_offscreen();

    resolve_bullet_hits(&mut state.bullets, &mut state.enemies);

    // Win short-circuits: no cleanup, no player check, no score this frame
    if let Some(id) = defeated_boss(&state.enemies) {
        state.phase = GamePhase::Won;
        state.events.push(GameEvent::BossDefeated { id });
        log::info!("Boss defeated - won with score {}", state.score);
        return;
    }

    state.purge_dead();

    if let Some(by) = player_contact(&state.player, &state.enemies) {
        state.phase = GamePhase::Lost;
        state.events.push(GameEvent::PlayerStruck { by });
        log::info!("Player struck - lost with score {}", state.score);
        return;
    }

    state.score += 1;
}
