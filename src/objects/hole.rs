use crate::math::vec2::Vec2;
use crate::objects::ball::Ball;
use crate::shapes::Circle;

/// A pocket. Static geometry; it only answers whether a ball has dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hole {
    pub position: Vec2,
    pub radius: f64,
}

impl Hole {
    pub fn new(position: Vec2, radius: f64) -> Self {
        Self { position, radius }
    }

    pub fn mouth(&self) -> Circle {
        Circle::new(self.position, self.radius)
    }

    /// A ball drops once its centre is closer than `radius + ball.radius / 2`.
    pub fn captures(&self, ball: &Ball) -> bool {
        self.mouth().contains(ball.position, 0.5 * ball.radius)
    }
}
