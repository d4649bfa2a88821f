pub mod ball;
pub mod ball_set;
pub mod cue;
pub mod hole;

pub use ball::{Ball, BallColour, BallId, BallKind, BallState, CueState};
pub use ball_set::BallSet;
pub use cue::shot_speed;
pub use hole::Hole;
