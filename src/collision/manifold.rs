use crate::math::vec2::Vec2;

/// Stores information about a contact between two balls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionManifold {
    /// Index in the ball set of the ball doing the update.
    pub ball_a_idx: usize,
    /// Index in the ball set of the ball it ran into.
    pub ball_b_idx: usize,
    /// Unit collision normal, pointing from ball A towards ball B.
    pub normal: Vec2,
    /// Distance between the two centres when the contact was detected.
    pub distance: f64,
    /// Sum of radii minus `distance`. Positive for a real contact.
    pub depth: f64,
}
