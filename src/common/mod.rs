pub mod config;
pub mod error;

pub use config::{BallLayout, PhysicsConfig, RackLayout, ShotConfig, SimulationConfig, TableLayout};
pub use error::ConfigError;
