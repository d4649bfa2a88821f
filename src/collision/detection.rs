use super::manifold::CollisionManifold;
use crate::math::vec2::Vec2;
use crate::objects::ball::Ball;
use crate::objects::hole::Hole;

/// Normal used when two centres coincide and the real one is undefined.
pub const FALLBACK_NORMAL: Vec2 = Vec2::new(0.0, 1.0);

/// Checks for contact between two balls.
/// Returns a manifold when the centres are strictly closer than the sum of the radii.
pub fn check_ball_ball(
    ball_a: &Ball,
    ball_a_idx: usize,
    ball_b: &Ball,
    ball_b_idx: usize,
) -> Option<CollisionManifold> {
    if !ball_a.footprint().overlaps(&ball_b.footprint()) {
        return None;
    }

    let dist_vec = ball_b.position - ball_a.position;
    let distance = dist_vec.magnitude();
    let normal = match dist_vec.try_normalize() {
        Some(normal) => normal,
        None => {
            log::warn!(
                "balls {} and {} share a centre at {:?}; separating along {:?}",
                ball_a.id,
                ball_b.id,
                ball_a.position,
                FALLBACK_NORMAL
            );
            FALLBACK_NORMAL
        }
    };

    Some(CollisionManifold {
        ball_a_idx,
        ball_b_idx,
        normal,
        distance,
        depth: ball_a.radius + ball_b.radius - distance,
    })
}

/// Index of the first hole, in table order, that captures the ball.
pub fn find_capturing_hole(ball: &Ball, holes: &[Hole]) -> Option<usize> {
    holes.iter().position(|hole| hole.captures(ball))
}
