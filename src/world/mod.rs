pub mod rack;
pub mod shot;
pub mod simulation;
pub mod step;
pub mod table;
pub mod timestep;

pub use rack::{rack_balls, rack_positions, scatter, CUE_BALL_ID, OBJECT_BALL_COUNT};
pub use shot::{shoot, ShotOutcome};
pub use simulation::Simulation;
pub use step::{tick, TickReport};
pub use table::{initialize_table, Table};
pub use timestep::FixedTimestep;
