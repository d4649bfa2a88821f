use super::aabb::AABB;
use super::manifold::CollisionManifold;
use crate::objects::ball::Ball;

/// What a ball-ball resolution actually changed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Resolution {
    /// Normal speed handed from A to B. Negative when the pair was already moving apart.
    pub transfer: f64,
    /// Positions were pushed apart to tangency.
    pub separated: bool,
}

/// Resolves a contact between two equal-mass balls.
///
/// The normal components of the velocities are exchanged with restitution `e`;
/// tangential components are untouched. The exchange applies to every
/// overlapping pair, including one already moving apart; the collision delay
/// is what keeps such pairs from re-triggering. Afterwards the overlap is
/// split evenly so the balls end exactly tangent.
pub fn resolve_ball_collision(
    ball_a: &mut Ball,
    ball_b: &mut Ball,
    manifold: &CollisionManifold,
    restitution: f64,
) -> Resolution {
    let mut resolution = Resolution::default();
    let normal = manifold.normal;

    let a_normal = ball_a.velocity.dot(normal);
    let b_normal = ball_b.velocity.dot(normal);

    let transfer = (a_normal - b_normal) * 0.5 * (1.0 + restitution);
    ball_a.velocity -= normal * transfer;
    ball_b.velocity += normal * transfer;
    resolution.transfer = transfer;

    let overlap = manifold.depth;
    if overlap > 0.0 {
        let half = normal * (0.5 * overlap);
        ball_a.position -= half;
        ball_b.position += half;
        resolution.separated = true;
    } else {
        log::warn!(
            "contact between {} and {} has non-positive overlap {:.6}; skipping correction",
            ball_a.id,
            ball_b.id,
            overlap
        );
    }

    resolution
}

/// Which cushions a ball was pushed back from this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CushionHit {
    pub x: bool,
    pub y: bool,
}

impl CushionHit {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Keeps a ball's centre inside `playable` (the table interior inset by the ball radius).
///
/// Each axis is handled independently, so a corner hit reflects both. The
/// reflected component always points back into the table and is scaled by
/// `restitution`.
pub fn resolve_cushion(ball: &mut Ball, playable: &AABB, restitution: f64) -> CushionHit {
    let mut hit = CushionHit::default();

    if ball.position.x < playable.min.x {
        ball.position.x = playable.min.x;
        ball.velocity.x = ball.velocity.x.abs() * restitution;
        hit.x = true;
    } else if ball.position.x > playable.max.x {
        ball.position.x = playable.max.x;
        ball.velocity.x = -ball.velocity.x.abs() * restitution;
        hit.x = true;
    }

    if ball.position.y < playable.min.y {
        ball.position.y = playable.min.y;
        ball.velocity.y = ball.velocity.y.abs() * restitution;
        hit.y = true;
    } else if ball.position.y > playable.max.y {
        ball.position.y = playable.max.y;
        ball.velocity.y = -ball.velocity.y.abs() * restitution;
        hit.y = true;
    }

    hit
}
