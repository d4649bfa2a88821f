use std::fmt;

use serde::Serialize;

use crate::math::vec2::Vec2;
use crate::shapes::Circle;

/// Stable identity of a ball for the lifetime of a rack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct BallId(pub u32);

impl fmt::Display for BallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Rendering category. Carries no physical meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BallColour {
    White,
    Red,
    Yellow,
    Black,
}

/// Extra state carried only by the cue ball.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CueState {
    /// Spot the cue ball is racked on and returned to after being pocketed.
    pub home: Vec2,
    /// Snapshot taken at the end of the last tick for the presentation layer:
    /// nothing was moving and the cue ball was on the table. Shot gating does
    /// not read it; it checks the live ball state instead, so edits made
    /// between ticks are honoured.
    pub shootable: bool,
}

/// Object balls leave the table for good when pocketed; the cue ball is re-spotted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BallKind {
    Object,
    Cue(CueState),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub id: BallId,
    pub colour: BallColour,
    pub kind: BallKind,

    // Primary state
    pub position: Vec2,
    pub velocity: Vec2, // Displacement per tick
    pub radius: f64,

    /// Derived each tick from the speed against the rest threshold.
    pub moving: bool,
    /// Ticks left before this ball may register another ball-ball collision.
    pub collision_cooldown: u32,
}

/// Snapshot of a ball for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BallState {
    pub id: BallId,
    pub colour: BallColour,
    pub position: Vec2,
    pub velocity: Vec2,
    pub moving: bool,
    pub on_table: bool,
}

impl Ball {
    /// Reserved position of a pocketed cue ball awaiting re-spot. Far outside any sane table.
    pub const OFF_TABLE: Vec2 = Vec2::new(-1.0e4, -1.0e4);

    /// Creates an object ball at rest.
    pub fn object(id: BallId, colour: BallColour, position: Vec2, radius: f64) -> Self {
        Self {
            id,
            colour,
            kind: BallKind::Object,
            position,
            velocity: Vec2::ZERO,
            radius,
            moving: false,
            collision_cooldown: 0,
        }
    }

    /// Creates the cue ball at rest on its home spot.
    pub fn cue(id: BallId, home: Vec2, radius: f64) -> Self {
        Self {
            id,
            colour: BallColour::White,
            kind: BallKind::Cue(CueState {
                home,
                shootable: true,
            }),
            position: home,
            velocity: Vec2::ZERO,
            radius,
            moving: false,
            collision_cooldown: 0,
        }
    }

    pub fn is_cue(&self) -> bool {
        matches!(self.kind, BallKind::Cue(_))
    }

    /// True while the ball sits on the sentinel position, outside physics space.
    pub fn is_off_table(&self) -> bool {
        self.position == Self::OFF_TABLE
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    pub fn footprint(&self) -> Circle {
        Circle::new(self.position, self.radius)
    }

    pub fn state(&self) -> BallState {
        BallState {
            id: self.id,
            colour: self.colour,
            position: self.position,
            velocity: self.velocity,
            moving: self.moving,
            on_table: !self.is_off_table(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_ball_starts_at_rest() {
        let ball = Ball::object(BallId(3), BallColour::Red, Vec2::new(100.0, 200.0), 9.0);
        assert!(!ball.is_cue());
        assert!(!ball.moving);
        assert_eq!(ball.velocity, Vec2::ZERO);
        assert_eq!(ball.collision_cooldown, 0);
        assert_eq!(ball.kind, BallKind::Object);
    }

    #[test]
    fn test_cue_ball_starts_home_and_shootable() {
        let home = Vec2::new(200.0, 225.0);
        let cue = Ball::cue(BallId(0), home, 9.0);
        assert!(cue.is_cue());
        assert_eq!(cue.position, home);
        assert_eq!(cue.colour, BallColour::White);
        assert_eq!(
            cue.kind,
            BallKind::Cue(CueState {
                home,
                shootable: true
            })
        );
    }

    #[test]
    fn test_state_reports_off_table() {
        let mut cue = Ball::cue(BallId(0), Vec2::new(200.0, 225.0), 9.0);
        assert!(cue.state().on_table);
        cue.position = Ball::OFF_TABLE;
        assert!(cue.is_off_table());
        assert!(!cue.state().on_table);
    }

    #[test]
    fn test_ball_id_display() {
        assert_eq!(BallId(7).to_string(), "#7");
    }
}
