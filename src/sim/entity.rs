//! Entity model
//!
//! Player, enemies, the boss and bullets all share one concrete record. The
//! `kind` tag carries the only behavior-affecting differences (boss-ness,
//! penetration), so nothing here needs dynamic dispatch.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Visual handle for the presentation layer (opaque to the simulation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sprite {
    Player,
    /// Angry cat, drawn with one of several images
    Enemy { variant: u8 },
    Boss,
    Bullet,
    PenetratingBullet,
}

/// What an entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Enemy,
    Boss,
    Bullet { penetrating: bool },
}

impl EntityKind {
    pub fn is_boss(&self) -> bool {
        matches!(self, EntityKind::Boss)
    }

    pub fn is_penetrating(&self) -> bool {
        matches!(self, EntityKind::Bullet { penetrating: true })
    }
}

/// A movable, collidable square
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub kind: EntityKind,
    /// Top-left corner
    pub pos: Vec2,
    /// Edge length of the square bounding box
    pub size: f32,
    /// Vertical velocity (positive = downward)
    pub vel_y: f32,
    /// Hits left; 0 means dead
    pub health: u32,
    pub sprite: Sprite,
}

impl Entity {
    pub fn player(id: u32, pos: Vec2, size: f32) -> Self {
        Self {
            id,
            kind: EntityKind::Player,
            pos,
            size,
            vel_y: 0.0,
            health: 1,
            sprite: Sprite::Player,
        }
    }

    pub fn enemy(id: u32, pos: Vec2, size: f32, vel_y: f32, variant: u8) -> Self {
        Self {
            id,
            kind: EntityKind::Enemy,
            pos,
            size,
            vel_y,
            health: 1,
            sprite: Sprite::Enemy { variant },
        }
    }

    pub fn boss(id: u32, pos: Vec2, size: f32, vel_y: f32, health: u32) -> Self {
        Self {
            id,
            kind: EntityKind::Boss,
            pos,
            size,
            vel_y,
            health,
            sprite: Sprite::Boss,
        }
    }

    /// A bullet moving upward at `speed`. Penetrating bullets get `penetrating_health`,
    /// regular ones die on their first hit.
    pub fn bullet(
        id: u32,
        pos: Vec2,
        size: f32,
        speed: f32,
        penetrating: bool,
        penetrating_health: u32,
    ) -> Self {
        Self {
            id,
            kind: EntityKind::Bullet { penetrating },
            pos,
            size,
            vel_y: -speed,
            health: if penetrating { penetrating_health } else { 1 },
            sprite: if penetrating {
                Sprite::PenetratingBullet
            } else {
                Sprite::Bullet
            },
        }
    }

    /// Advance along the vertical axis by own velocity
    pub fn advance(&mut self) {
        self.pos.y += self.vel_y;
    }

    /// Strict axis-aligned overlap; touching edges do not collide
    pub fn overlaps(&self, other: &Entity) -> bool {
        boxes_overlap(self.pos, self.size, other.pos, other.size)
    }

    /// Take one unit of damage, returning the remaining health
    pub fn hit(&mut self) -> u32 {
        self.health = self.health.saturating_sub(1);
        self.health
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// Bottom edge (y grows downward)
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size
    }
}

/// Overlap test for two squares given by top-left corner and edge length
#[inline]
pub fn boxes_overlap(a: Vec2, a_size: f32, b: Vec2, b_size: f32) -> bool {
    b.x < a.x + a_size && b.x + b_size > a.x && b.y < a.y + a_size && b.y + b_size > a.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_exact_overlap() {
        let player = Entity::player(1, Vec2::new(100.0, 100.0), 40.0);
        let enemy = Entity::enemy(2, Vec2::new(100.0, 100.0), 40.0, 4.0, 0);
        assert!(player.overlaps(&enemy));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Entity::enemy(1, Vec2::new(0.0, 0.0), 40.0, 4.0, 0);
        let right = Entity::enemy(2, Vec2::new(40.0, 0.0), 40.0, 4.0, 0);
        let below = Entity::enemy(3, Vec2::new(0.0, 40.0), 40.0, 4.0, 0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));

        let nudged = Entity::enemy(4, Vec2::new(39.5, 39.5), 40.0, 4.0, 0);
        assert!(a.overlaps(&nudged));
    }

    #[test]
    fn test_bullet_variants() {
        let regular = Entity::bullet(1, Vec2::ZERO, 30.0, 8.0, false, 9999);
        let piercing = Entity::bullet(2, Vec2::ZERO, 30.0, 8.0, true, 9999);

        assert_eq!(regular.health, 1);
        assert_eq!(regular.sprite, Sprite::Bullet);
        assert!(!regular.kind.is_penetrating());
        assert_eq!(piercing.health, 9999);
        assert_eq!(piercing.sprite, Sprite::PenetratingBullet);
        assert!(piercing.kind.is_penetrating());
        assert_eq!(regular.vel_y, -8.0);
    }

    #[test]
    fn test_hit_and_death() {
        let mut boss = Entity::boss(1, Vec2::ZERO, 400.0, 2.0, 2);
        assert_eq!(boss.hit(), 1);
        assert!(!boss.is_dead());
        assert_eq!(boss.hit(), 0);
        assert!(boss.is_dead());
        // Still hittable until purged, but never below zero
        assert_eq!(boss.hit(), 0);
    }

    #[test]
    fn test_advance_moves_vertically_only() {
        let mut bullet = Entity::bullet(1, Vec2::new(50.0, 50.0), 30.0, 8.0, false, 9999);
        bullet.advance();
        assert_eq!(bullet.pos, Vec2::new(50.0, 42.0));

        let mut player = Entity::player(2, Vec2::new(10.0, 20.0), 40.0);
        player.advance();
        assert_eq!(player.pos, Vec2::new(10.0, 20.0));
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0, a_size in 1.0f32..400.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0, b_size in 1.0f32..400.0,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            prop_assert_eq!(boxes_overlap(a, a_size, b, b_size), boxes_overlap(b, b_size, a, a_size));
        }

        #[test]
        fn prop_health_never_increases(start in 0u32..50, hits in 0usize..80) {
            let mut enemy = Entity::boss(1, Vec2::ZERO, 40.0, 2.0, start);
            let mut last = enemy.health;
            for _ in 0..hits {
                let now = enemy.hit();
                prop_assert!(now <= last);
                last = now;
            }
            prop_assert_eq!(enemy.is_dead(), (start as usize) <= hits);
        }
    }
}
