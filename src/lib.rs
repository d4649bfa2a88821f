//! Per-tick physics for a 2D billiards table.
//!
//! Balls roll under friction, bounce off the cushions, collide elastically
//! with each other and drop into pockets. The engine only produces ball
//! positions, velocities and pocketing events each tick; drawing and input
//! belong to the caller.

pub mod collision;
pub mod common;
pub mod integration;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use common::{BallLayout, ConfigError, PhysicsConfig, RackLayout, ShotConfig, SimulationConfig, TableLayout};
pub use math::vec2::Vec2;
pub use objects::{Ball, BallColour, BallId, BallSet, BallState, Hole};
pub use world::{initialize_table, rack_balls, shoot, tick, ShotOutcome, Simulation, Table, TickReport};
