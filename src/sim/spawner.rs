//! Enemy and boss spawning
//!
//! Timing is purely frame/score driven. Randomness only picks attributes
//! (horizontal position, sprite, speed) and always comes from the caller's RNG.

use glam::Vec2;
use rand::Rng;

use super::entity::Entity;
use super::state::{GameEvent, GameState};
use crate::consts::DIFFICULTY_RAMP_FRAMES;

/// Enemy speed for a U{0,1,2} draw at a given frame count.
/// The spread widens as the session goes on.
pub fn enemy_speed(base_speed: f32, roll: u32, frame_counter: u64) -> f32 {
    base_speed - 1.0 + roll as f32 * (1.0 + frame_counter as f32 / DIFFICULTY_RAMP_FRAMES)
}

/// Whether a boss enters at this score (strictly above the threshold, on a multiple)
pub fn boss_due(score: u64, threshold: u64) -> bool {
    score > threshold && score % threshold == 0
}

/// Random integer x in [0, width - size]
fn random_x(rng: &mut impl Rng, playfield_width: f32, size: f32) -> f32 {
    let max_x = (playfield_width - size).max(0.0).floor() as u32;
    rng.random_range(0..=max_x) as f32
}

/// Spawn a regular enemy once the spawn timer reaches the interval
pub fn spawn_interval_enemy(state: &mut GameState, rng: &mut impl Rng) -> Option<u32> {
    if state.spawn_timer < state.settings.spawn_interval {
        return None;
    }
    state.spawn_timer = 0;

    let settings = &state.settings;
    let size = settings.object_size;
    let x = random_x(rng, settings.playfield_width, size);
    let variant = rng.random_range(0..settings.enemy_sprite_variants);
    let roll = rng.random_range(0..=2u32);
    let speed = enemy_speed(settings.object_speed, roll, state.frame_counter);

    let id = state.next_entity_id();
    state
        .enemies
        .push(Entity::enemy(id, Vec2::new(x, -size), size, speed, variant));
    state.events.push(GameEvent::EnemySpawned { id });
    Some(id)
}

/// Spawn a boss above the top edge when the score gate opens
pub fn spawn_boss(state: &mut GameState, rng: &mut impl Rng) -> Option<u32> {
    if !boss_due(state.score, state.settings.boss_threshold) {
        return None;
    }

    let settings = &state.settings;
    let size = settings.boss_size;
    let x = random_x(rng, settings.playfield_width, size);
    let (speed, health) = (settings.boss_speed(), settings.boss_health);

    let id = state.next_entity_id();
    state
        .enemies
        .push(Entity::boss(id, Vec2::new(x, -size), size, speed, health));
    state.events.push(GameEvent::BossSpawned { id });
    log::debug!("Boss {id} spawned at score {}", state.score);
    Some(id)
}

/// Run both spawn triggers for this frame
pub fn run(state: &mut GameState, rng: &mut impl Rng) {
    spawn_interval_enemy(state, rng);
    spawn_boss(state, rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::entity::{EntityKind, Sprite};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn state() -> GameState {
        GameState::new(Settings::default()).expect("default settings are valid")
    }

    #[test]
    fn test_enemy_speed_formula() {
        assert_eq!(enemy_speed(4.0, 0, 0), 3.0);
        assert_eq!(enemy_speed(4.0, 1, 0), 4.0);
        assert_eq!(enemy_speed(4.0, 2, 0), 5.0);
        // 1 + 400/200 = 3 per roll unit
        assert_eq!(enemy_speed(4.0, 2, 400), 9.0);
        assert_eq!(enemy_speed(4.0, 0, 400), 3.0);
    }

    #[test]
    fn test_boss_gate_sequence() {
        let fired: Vec<u64> = (398..=1200).filter(|&s| boss_due(s, 400)).collect();
        assert_eq!(fired, vec![800, 1200]);
        assert!(!boss_due(400, 400));
        assert!(!boss_due(0, 400));
    }

    #[test]
    fn test_interval_spawn_cadence() {
        let mut state = state();
        let mut rng = Pcg32::seed_from_u64(7);
        for frame in 1..=12u32 {
            state.spawn_timer += 1;
            state.frame_counter += 1;
            let spawned = spawn_interval_enemy(&mut state, &mut rng).is_some();
            assert_eq!(spawned, frame % 5 == 0, "frame {frame}");
        }
        assert_eq!(state.enemies.len(), 2);
        assert_eq!(state.spawn_timer, 2);
    }

    #[test]
    fn test_spawned_enemy_attributes() {
        let mut state = state();
        let mut rng = Pcg32::seed_from_u64(99);
        for _ in 0..200 {
            state.spawn_timer = state.settings.spawn_interval;
            spawn_interval_enemy(&mut state, &mut rng);
        }
        for enemy in &state.enemies {
            assert_eq!(enemy.kind, EntityKind::Enemy);
            assert_eq!(enemy.health, 1);
            assert_eq!(enemy.pos.y, -40.0);
            assert!(enemy.pos.x >= 0.0 && enemy.pos.x <= 984.0);
            assert_eq!(enemy.pos.x.fract(), 0.0);
            assert!([3.0, 4.0, 5.0].contains(&enemy.vel_y));
            assert!(matches!(enemy.sprite, Sprite::Enemy { variant } if variant < 4));
        }
    }

    #[test]
    fn test_boss_spawn() {
        let mut state = state();
        let mut rng = Pcg32::seed_from_u64(3);
        state.score = 400;
        assert_eq!(spawn_boss(&mut state, &mut rng), None);

        state.score = 800;
        let id = spawn_boss(&mut state, &mut rng).expect("boss due");
        let boss = &state.enemies[0];
        assert_eq!(boss.id, id);
        assert!(boss.kind.is_boss());
        assert_eq!((boss.size, boss.health, boss.vel_y), (400.0, 20, 2.0));
        assert_eq!(boss.pos.y, -400.0);
        assert!(boss.pos.x <= 624.0);
        assert_eq!(state.drain_events(), vec![GameEvent::BossSpawned { id }]);
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let mut a = state();
        let mut b = state();
        let mut rng_a = Pcg32::seed_from_u64(2024);
        let mut rng_b = Pcg32::seed_from_u64(2024);
        for _ in 0..50 {
            a.spawn_timer = 5;
            b.spawn_timer = 5;
            spawn_interval_enemy(&mut a, &mut rng_a);
            spawn_interval_enemy(&mut b, &mut rng_b);
        }
        assert_eq!(a.enemies, b.enemies);
    }
}
