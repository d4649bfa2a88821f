use crate::math::vec2::Vec2;
use crate::objects::ball::Ball;

/// Advances a ball by one fixed tick using explicit Euler, then applies friction.
///
/// Velocity is displacement per tick, so the tick length is implicitly 1.
/// Above `rest_threshold` the velocity decays geometrically by `friction`;
/// at or below it the ball is snapped to rest, so every ball stops in finite time.
pub fn integrate(ball: &mut Ball, friction: f64, rest_threshold: f64) {
    if ball.is_off_table() {
        return;
    }

    ball.position += ball.velocity;

    if ball.velocity.magnitude() > rest_threshold {
        ball.velocity *= friction;
        ball.moving = true;
    } else {
        ball.velocity = Vec2::ZERO;
        ball.moving = false;
    }
}
