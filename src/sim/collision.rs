//! Collision detection and damage
//!
//! Two phases per frame. Bullets against enemies/bosses first, with damage
//! applied symmetrically and nothing purged until every pair has been tested.
//! Then, after the dead are gone, enemies/bosses against the player.

use super::entity::Entity;

/// Test every bullet against every enemy/boss and apply one unit of damage to
/// both sides of each overlap. Entities at zero health stay hittable until the
/// caller purges them. Returns the number of contacts.
pub fn resolve_bullet_hits(bullets: &mut [Entity], targets: &mut [Entity]) -> usize {
    let mut contacts = 0;
    for bullet in bullets.iter_mut() {
        for target in targets.iter_mut() {
            if bullet.overlaps(target) {
                bullet.hit();
                target.hit();
                contacts += 1;
            }
        }
    }
    contacts
}

/// ID of the first boss whose health ran out, if any
pub fn defeated_boss(targets: &[Entity]) -> Option<u32> {
    targets
        .iter()
        .find(|e| e.kind.is_boss() && e.is_dead())
        .map(|e| e.id)
}

/// ID of the first enemy/boss touching the player, if any
pub fn player_contact(player: &Entity, targets: &[Entity]) -> Option<u32> {
    targets.iter().find(|e| e.overlaps(player)).map(|e| e.id)
}
