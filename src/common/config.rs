//! Tunable simulation parameters.
//!
//! Every constant the engine uses lives here so table sizes, friction and
//! shot strength can be changed from a JSON file without recompiling.
//! All sections are `#[serde(default)]`, so a file only needs the keys it
//! overrides.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::math::vec2::Vec2;

/// Per-tick physics parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Velocity multiplier applied each tick while a ball is above the rest threshold. Range [0, 1].
    pub friction: f64,
    /// Ball-ball coefficient of restitution. 1 = perfectly elastic.
    pub restitution: f64,
    /// Cushion coefficient of restitution.
    pub cushion_restitution: f64,
    /// Ticks a ball must wait after a collision before it may collide again.
    pub collision_delay: u32,
    /// Speed (pixels per tick) at or below which a ball is snapped to rest.
    pub rest_threshold: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            friction: 0.99,
            restitution: 1.0,
            cushion_restitution: 1.0,
            collision_delay: 0,
            rest_threshold: 0.1,
        }
    }
}

/// Interior playing rectangle and pocket placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableLayout {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub hole_radius: f64,
    /// Pocket centres, tested in this order.
    pub holes: Vec<Vec2>,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            min_x: 50.0,
            max_x: 750.0,
            min_y: 50.0,
            max_y: 400.0,
            hole_radius: 25.0,
            holes: vec![
                Vec2::new(50.0, 50.0),
                Vec2::new(400.0, 50.0),
                Vec2::new(750.0, 50.0),
                Vec2::new(50.0, 400.0),
                Vec2::new(400.0, 400.0),
                Vec2::new(750.0, 400.0),
            ],
        }
    }
}

/// Arrangement of the object balls at rack time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RackLayout {
    /// Fifteen balls in a five-row triangle, apex pointing at the cue ball.
    Triangle,
    /// Fifteen balls in a single horizontal row centred on the rack spot.
    Row,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallLayout {
    pub radius: f64,
    /// Where the cue ball is placed at rack time and re-spotted after a scratch.
    pub cue_home: Vec2,
    pub rack: RackLayout,
    /// Apex of the triangle, or centre of the row.
    pub rack_spot: Vec2,
    /// Extra spacing between neighbouring racked balls.
    pub rack_gap: f64,
}

impl Default for BallLayout {
    fn default() -> Self {
        Self {
            radius: 9.0,
            cue_home: Vec2::new(200.0, 225.0),
            rack: RackLayout::Triangle,
            rack_spot: Vec2::new(560.0, 225.0),
            rack_gap: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShotConfig {
    /// Upper bound on the cue ball's launch speed, in pixels per tick.
    pub max_speed: f64,
    /// Launch speed gained per second the shot button is held.
    pub speed_per_second: f64,
}

impl Default for ShotConfig {
    fn default() -> Self {
        Self {
            max_speed: 20.0,
            speed_per_second: 10.0,
        }
    }
}

/// Complete configuration for a [`Simulation`](crate::world::Simulation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub table: TableLayout,
    pub balls: BallLayout,
    pub shot: ShotConfig,
    /// Fixed ticks per second.
    pub tick_rate: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            table: TableLayout::default(),
            balls: BallLayout::default(),
            shot: ShotConfig::default(),
            tick_rate: 60.0,
        }
    }
}

impl SimulationConfig {
    /// Parses and validates a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Duration of one tick in seconds.
    pub fn tick_dt(&self) -> f64 {
        1.0 / self.tick_rate
    }

    /// Checks every value against the range the engine can simulate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let physics = &self.physics;
        unit_interval("physics.friction", physics.friction)?;
        unit_interval("physics.restitution", physics.restitution)?;
        unit_interval("physics.cushion_restitution", physics.cushion_restitution)?;
        if !(physics.rest_threshold.is_finite() && physics.rest_threshold >= 0.0) {
            return Err(ConfigError::invalid(
                "physics.rest_threshold",
                format!("must be finite and non-negative, got {}", physics.rest_threshold),
            ));
        }

        let radius = self.balls.radius;
        positive("balls.radius", radius)?;
        positive("table.hole_radius", self.table.hole_radius)?;
        if !(self.balls.rack_gap.is_finite() && self.balls.rack_gap >= 0.0) {
            return Err(ConfigError::invalid(
                "balls.rack_gap",
                format!("must be finite and non-negative, got {}", self.balls.rack_gap),
            ));
        }

        let table = &self.table;
        for (field, value) in [
            ("table.min_x", table.min_x),
            ("table.max_x", table.max_x),
            ("table.min_y", table.min_y),
            ("table.max_y", table.max_y),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::invalid(field, format!("must be finite, got {}", value)));
            }
        }
        if table.max_x - table.min_x <= 2.0 * radius {
            return Err(ConfigError::invalid(
                "table.max_x",
                "playing area must be wider than one ball",
            ));
        }
        if table.max_y - table.min_y <= 2.0 * radius {
            return Err(ConfigError::invalid(
                "table.max_y",
                "playing area must be taller than one ball",
            ));
        }
        if table.holes.iter().any(|h| !h.is_finite()) {
            return Err(ConfigError::invalid("table.holes", "hole positions must be finite"));
        }

        let home = self.balls.cue_home;
        let inside_x = home.x >= table.min_x + radius && home.x <= table.max_x - radius;
        let inside_y = home.y >= table.min_y + radius && home.y <= table.max_y - radius;
        if !(inside_x && inside_y) {
            return Err(ConfigError::invalid(
                "balls.cue_home",
                format!("({}, {}) is outside the playable area", home.x, home.y),
            ));
        }

        positive("tick_rate", self.tick_rate)?;
        for (field, value) in [
            ("shot.max_speed", self.shot.max_speed),
            ("shot.speed_per_second", self.shot.speed_per_second),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::invalid(
                    field,
                    format!("must be finite and non-negative, got {}", value),
                ));
            }
        }
        Ok(())
    }
}

fn unit_interval(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must lie in [0, 1], got {}", value)))
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be positive, got {}", value)))
    }
}
