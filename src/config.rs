//! Game tuning and resource configuration
//!
//! Loaded once at startup from JSON (or defaults) and validated before a
//! session is created. Nothing here changes while a session runs.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Obstacle spacing presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpacingPreset {
    /// Wide gaps, one hazard on screen at a time
    #[default]
    Classic,
    /// Tight gaps, hazards arrive in clusters
    Dense,
}

impl SpacingPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpacingPreset::Classic => "Classic",
            SpacingPreset::Dense => "Dense",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(SpacingPreset::Classic),
            "dense" => Some(SpacingPreset::Dense),
            _ => None,
        }
    }

    /// Extra distance beyond the right edge where hazards appear (min, max)
    pub fn gap_range(&self) -> (u32, u32) {
        match self {
            SpacingPreset::Classic => (600, 900),
            SpacingPreset::Dense => (150, 300),
        }
    }
}

/// Named obstacle variants and their hitbox sizes
///
/// Stands in for the asset loader: the spawner only needs to know how many
/// variants exist and how big each one is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleCatalog {
    /// Cactus sizes, variant N uses entry N-1
    pub cactus_sizes: Vec<Vec2>,
    /// Number of bird variants (all share one size)
    pub bird_count: u32,
    /// Bird hitbox size
    pub bird_size: Vec2,
}

impl Default for ObstacleCatalog {
    fn default() -> Self {
        Self {
            cactus_sizes: vec![
                Vec2::new(34.0, 70.0),
                Vec2::new(68.0, 70.0),
                Vec2::new(102.0, 70.0),
                Vec2::new(50.0, 100.0),
                Vec2::new(100.0, 100.0),
                Vec2::new(150.0, 100.0),
            ],
            bird_count: 1,
            bird_size: Vec2::new(92.0, 77.0),
        }
    }
}

impl ObstacleCatalog {
    pub fn cactus_count(&self) -> u32 {
        self.cactus_sizes.len() as u32
    }

    pub fn bird_count(&self) -> u32 {
        self.bird_count
    }

    /// Size of cactus variant `n` (1-based)
    pub fn cactus_size(&self, n: u32) -> Vec2 {
        let idx = (n.max(1) - 1) as usize;
        self.cactus_sizes
            .get(idx)
            .or(self.cactus_sizes.last())
            .copied()
            .unwrap_or(Vec2::ZERO)
    }
}

/// Every tunable of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    // === World ===
    pub world_width: f32,
    pub world_height: f32,

    // === Player ===
    /// Downward acceleration (units/s²)
    pub gravity: f32,
    /// Upward speed applied on jump (units/s)
    pub jump_impulse: f32,

    // === Scrolling (units per tick) ===
    pub base_speed: f32,
    pub cloud_speed: f32,
    /// Clouds leaving the left edge reappear this far past the right edge
    pub cloud_wrap_margin: f32,

    // === Spawner ===
    pub spawn_interval_ms: u32,
    pub spacing: SpacingPreset,
    pub min_gap: u32,
    pub max_gap: u32,
    /// Flying hazard heights above the ground
    pub bird_altitudes: Vec<f32>,
    pub obstacles: ObstacleCatalog,

    // === Scoring ===
    pub score_interval_ms: u32,
    /// Every multiple of this score bumps the speed modifier
    pub speed_step_score: u32,
    /// Zero-padded width of the score text
    pub score_digits: usize,

    // === Start sequence ===
    pub trigger_start_y: f32,
    pub initial_ground_width: f32,
    pub reveal_hz: u32,
    pub reveal_ground_step: f32,
    /// Horizontal speed the player is pushed with during the reveal (units/s)
    pub reveal_push_speed: f32,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        let (min_gap, max_gap) = SpacingPreset::Classic.gap_range();
        Self {
            world_width: 1000.0,
            world_height: 340.0,

            gravity: 5000.0,
            jump_impulse: 1600.0,

            base_speed: 5.0,
            cloud_speed: 0.5,
            cloud_wrap_margin: 30.0,

            spawn_interval_ms: 1500,
            spacing: SpacingPreset::Classic,
            min_gap,
            max_gap,
            bird_altitudes: vec![20.0, 70.0],
            obstacles: ObstacleCatalog::default(),

            score_interval_ms: 100,
            speed_step_score: 100,
            score_digits: 5,

            trigger_start_y: 10.0,
            initial_ground_width: 88.0,
            reveal_hz: 60,
            reveal_ground_step: 34.0,
            reveal_push_speed: 80.0,
        }
    }
}

impl RunnerConfig {
    /// Create a config from a spacing preset (applies the preset's gap range)
    pub fn from_preset(preset: SpacingPreset) -> Self {
        let mut config = Self::default();
        config.apply_preset(preset);
        config
    }

    /// Apply a spacing preset
    pub fn apply_preset(&mut self, preset: SpacingPreset) {
        let (min_gap, max_gap) = preset.gap_range();
        self.spacing = preset;
        self.min_gap = min_gap;
        self.max_gap = max_gap;
        log::debug!("Spacing preset {} ({}-{})", preset.as_str(), min_gap, max_gap);
    }

    /// Reveal sub-routine period in microseconds
    pub fn reveal_step_micros(&self) -> u64 {
        1_000_000 / self.reveal_hz.max(1) as u64
    }

    /// Reject configurations that would make the session misbehave mid-run
    pub fn validate(&self) -> Result<()> {
        let fail = |msg: &str| Err(Error::InvalidConfig(msg.to_string()));

        if !(self.world_width > 0.0 && self.world_height > 0.0) {
            return fail("world size must be positive");
        }
        if self.obstacles.cactus_count() == 0 {
            return fail("at least one cactus variant is required");
        }
        if self.obstacles.bird_count > 0 && self.bird_altitudes.is_empty() {
            return fail("bird variants configured without altitude presets");
        }
        if self.min_gap > self.max_gap {
            return fail("min_gap exceeds max_gap");
        }
        if self.spawn_interval_ms == 0 || self.score_interval_ms == 0 {
            return fail("spawn and score intervals must be non-zero");
        }
        if self.speed_step_score == 0 {
            return fail("speed_step_score must be non-zero");
        }
        if self.reveal_hz == 0 || self.reveal_ground_step <= 0.0 {
            return fail("reveal must advance");
        }
        if !(self.base_speed > 0.0) {
            return fail("base_speed must be positive");
        }
        if !(self.gravity > 0.0 && self.jump_impulse > 0.0) {
            return fail("gravity and jump_impulse must be positive");
        }
        Ok(())
    }

    /// Parse and validate a JSON config
    ///
    /// `spacing` supplies the gap range unless `min_gap` or `max_gap` is given.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let explicit_gaps = value.get("min_gap").is_some() || value.get("max_gap").is_some();
        let mut config: Self = serde_json::from_value(value)?;
        if !explicit_gaps {
            config.apply_preset(config.spacing);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Config saved to {}", path.as_ref().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RunnerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.obstacles.cactus_count(), 6);
        assert_eq!(config.reveal_step_micros(), 16_666);
    }

    #[test]
    fn test_dense_preset() {
        let config = RunnerConfig::from_preset(SpacingPreset::Dense);
        assert_eq!((config.min_gap, config.max_gap), (150, 300));
        assert_eq!(SpacingPreset::from_name("DENSE"), Some(SpacingPreset::Dense));
        assert_eq!(SpacingPreset::from_name("nope"), None);
    }

    #[test]
    fn test_zero_variants_rejected() {
        let mut config = RunnerConfig::default();
        config.obstacles.cactus_sizes.clear();
        config.obstacles.bird_count = 0;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_inverted_gap_rejected() {
        let mut config = RunnerConfig::default();
        config.min_gap = 900;
        config.max_gap = 600;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_speed_rejected() {
        assert!(RunnerConfig::from_json(r#"{ "base_speed": 0.0 }"#).is_err());

        let mut config = RunnerConfig::default();
        config.base_speed = f32::NAN;
        assert!(config.validate().is_err());

        let mut config = RunnerConfig::default();
        config.gravity = 0.0;
        assert!(config.validate().is_err());

        let mut config = RunnerConfig::default();
        config.jump_impulse = -1600.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_spacing_from_json() {
        let config = RunnerConfig::from_json(r#"{ "spacing": "Dense" }"#).unwrap();
        assert_eq!(config.spacing, SpacingPreset::Dense);
        assert_eq!((config.min_gap, config.max_gap), (150, 300));

        // Explicit gaps win over the preset
        let config =
            RunnerConfig::from_json(r#"{ "spacing": "Dense", "min_gap": 400, "max_gap": 500 }"#)
                .unwrap();
        assert_eq!((config.min_gap, config.max_gap), (400, 500));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = RunnerConfig::from_json(r#"{ "base_speed": 8.0, "min_gap": 150, "max_gap": 300 }"#)
            .unwrap();
        assert_eq!(config.base_speed, 8.0);
        assert_eq!(config.min_gap, 150);
        assert_eq!(config.world_width, 1000.0);
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(RunnerConfig::from_json(r#"{ "spawn_interval_ms": 0 }"#).is_err());
        assert!(RunnerConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_cactus_size_lookup() {
        let catalog = ObstacleCatalog::default();
        assert_eq!(catalog.cactus_size(1), Vec2::new(34.0, 70.0));
        assert_eq!(catalog.cactus_size(6), Vec2::new(150.0, 100.0));
    }
}
