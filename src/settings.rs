//! Game settings
//!
//! One immutable configuration struct handed to `GameState::new`. Everything
//! the simulation needs to know about layout and kinematics lives here, so
//! there is no module-level mutable state anywhere in the crate.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    /// Playfield width (movement clamping and spawn placement)
    pub playfield_width: f32,
    /// Playfield height (movement clamping and off-screen purge)
    pub playfield_height: f32,
    /// Presentation frame rate target (not used by the sim)
    pub target_fps: u32,

    // === Enemies ===
    /// Edge length of a regular enemy
    pub object_size: f32,
    /// Baseline enemy speed (pixels per frame)
    pub object_speed: f32,
    /// Frames between interval enemy spawns
    pub spawn_interval: u32,
    /// Number of sprite variants enemies are drawn from
    pub enemy_sprite_variants: u8,

    // === Bullets ===
    pub bullet_size: f32,
    /// Upward speed (pixels per frame, positive)
    pub bullet_speed: f32,
    /// Starting health of a penetrating bullet
    pub penetrating_bullet_health: u32,

    // === Player ===
    pub player_size: f32,
    /// Gap between the player's start position and the bottom edge
    pub player_bottom_margin: f32,

    // === Boss ===
    pub boss_size: f32,
    pub boss_health: u32,
    /// Boss speed as a fraction of `object_speed`
    pub boss_speed_factor: f32,
    /// A boss spawns when score > threshold and score % threshold == 0
    pub boss_threshold: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playfield_width: SCREEN_WIDTH,
            playfield_height: SCREEN_HEIGHT,
            target_fps: FPS,

            object_size: DEFAULT_OBJECT_SIZE,
            object_speed: DEFAULT_OBJECT_SPEED,
            spawn_interval: SPAWN_INTERVAL,
            enemy_sprite_variants: ENEMY_SPRITE_VARIANTS,

            bullet_size: DEFAULT_BULLET_SIZE,
            bullet_speed: DEFAULT_BULLET_SPEED,
            penetrating_bullet_health: PENETRATING_BULLET_HEALTH,

            player_size: DEFAULT_PLAYER_SIZE,
            player_bottom_margin: PLAYER_BOTTOM_MARGIN,

            boss_size: BOSS_OBJECT_SIZE,
            boss_health: BOSS_OBJECT_HEALTH,
            boss_speed_factor: BOSS_SPEED_FACTOR,
            boss_threshold: BOSS_START_SCORE,
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|err| SettingsError::Parse {
            message: format!("{}: {err}", path.display()),
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Same settings on a different playfield
    pub fn with_playfield(&self, width: f32, height: f32) -> Self {
        Self {
            playfield_width: width,
            playfield_height: height,
            ..self.clone()
        }
    }

    /// Reject settings that would corrupt layout or spawn placement
    pub fn validate(&self) -> Result<(), SettingsError> {
        let (width, height) = (self.playfield_width, self.playfield_height);
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(SettingsError::InvalidPlayfield { width, height });
        }

        for (object, size) in [
            ("enemy", self.object_size),
            ("bullet", self.bullet_size),
            ("player", self.player_size),
            ("boss", self.boss_size),
        ] {
            if !(size.is_finite() && size > 0.0) {
                return Err(SettingsError::InvalidSize { object, size });
            }
            if size > width {
                return Err(SettingsError::WiderThanPlayfield {
                    object,
                    size,
                    width,
                });
            }
        }

        let needed = self.player_size + self.player_bottom_margin;
        if !(self.player_bottom_margin >= 0.0 && needed <= height) {
            return Err(SettingsError::PlayerTallerThanPlayfield { needed, height });
        }

        for (name, value) in [
            ("spawn_interval", u64::from(self.spawn_interval)),
            ("enemy_sprite_variants", u64::from(self.enemy_sprite_variants)),
            ("penetrating_bullet_health", u64::from(self.penetrating_bullet_health)),
            ("boss_health", u64::from(self.boss_health)),
            ("boss_threshold", self.boss_threshold),
        ] {
            if value == 0 {
                return Err(SettingsError::ZeroSetting { name });
            }
        }

        // The slowest enemy moves at object_speed - 1 and must still descend
        if !(self.object_speed.is_finite() && self.object_speed > 1.0) {
            return Err(SettingsError::InvalidSpeed {
                object: "enemy",
                speed: self.object_speed,
            });
        }
        let boss_speed = self.object_speed * self.boss_speed_factor;
        if !(boss_speed.is_finite() && boss_speed > 0.0) {
            return Err(SettingsError::InvalidSpeed {
                object: "boss",
                speed: boss_speed,
            });
        }
        if !(self.bullet_speed.is_finite() && self.bullet_speed > 0.0) {
            return Err(SettingsError::InvalidSpeed {
                object: "bullet",
                speed: self.bullet_speed,
            });
        }

        Ok(())
    }

    /// Top-left corner the player starts from (centered, near the bottom)
    pub fn player_start(&self) -> (f32, f32) {
        (
            ((self.playfield_width - self.player_size) / 2.0).floor(),
            self.playfield_height - self.player_size - self.player_bottom_margin,
        )
    }

    /// Boss vertical speed
    pub fn boss_speed(&self) -> f32 {
        self.object_speed * self.boss_speed_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.player_start(), (492.0, 718.0));
        assert!((settings.boss_speed() - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "playfield_width": 800, "spawn_interval": 10 }"#)
            .expect("valid settings");
        assert_eq!(settings.playfield_width, 800.0);
        assert_eq!(settings.spawn_interval, 10);
        assert_eq!(settings.playfield_height, SCREEN_HEIGHT);
        assert_eq!(settings.boss_threshold, BOSS_START_SCORE);
    }

    #[test]
    fn test_boss_wider_than_playfield_rejected() {
        let settings = Settings {
            playfield_width: 300.0,
            ..Default::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::WiderThanPlayfield {
                object: "boss",
                size: 400.0,
                width: 300.0,
            })
        );
    }

    #[test]
    fn test_zero_counters_rejected() {
        let settings = Settings {
            spawn_interval: 0,
            ..Default::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::ZeroSetting {
                name: "spawn_interval"
            })
        );

        let settings = Settings {
            boss_threshold: 0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::ZeroSetting {
                name: "boss_threshold"
            })
        ));
    }

    #[test]
    fn test_bad_playfield_and_speeds_rejected() {
        let settings = Settings {
            playfield_height: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidPlayfield { .. })
        ));

        let settings = Settings {
            object_speed: 1.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidSpeed { object: "enemy", .. })
        ));

        let settings = Settings {
            player_size: 40.0,
            playfield_height: 45.0,
            boss_size: 40.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::PlayerTallerThanPlayfield { .. })
        ));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
        assert!(err.to_string().starts_with("could not parse settings"));
    }
}
