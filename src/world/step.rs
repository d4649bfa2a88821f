//! One fixed tick of the table.

use std::collections::BTreeSet;

use crate::collision::{check_ball_ball, find_capturing_hole, resolve_ball_collision, resolve_cushion};
use crate::common::PhysicsConfig;
use crate::integration::integrate;
use crate::math::vec2::Vec2;
use crate::objects::{Ball, BallId, BallSet};
use crate::shapes::Circle;
use crate::world::table::Table;

/// Everything that happened during one tick that the presentation layer may care about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Object balls removed from the table this tick.
    pub pocketed: BTreeSet<BallId>,
    /// The cue ball dropped this tick and is waiting off-table.
    pub cue_ball_pocketed: bool,
    /// The cue ball was put back on the table at the end of this tick.
    pub cue_ball_returned_home: bool,
    /// Ball-ball contacts resolved.
    pub collisions: usize,
    /// Balls pushed back from a cushion.
    pub cushion_hits: usize,
}

/// Advances every ball by one tick.
///
/// Balls update strictly in set order. Each one integrates, checks the pockets,
/// bounces off the cushions and then resolves contacts against every other ball
/// still on the table, mutating both participants in place. A later ball
/// therefore sees the already-corrected state of earlier ones; multi-ball
/// contacts depend on that order, which `BallSet` keeps stable.
///
/// Pocketed object balls are only flagged during the pass and removed once it
/// ends. An off-table cue ball is re-spotted when nothing is left moving, but
/// never in the same tick it dropped, so callers always see it off the table
/// once.
pub fn tick(table: &Table, balls: &mut BallSet, physics: &PhysicsConfig) -> TickReport {
    let mut report = TickReport::default();
    let count = balls.len();
    let mut pocketed = vec![false; count];

    {
        let slice = balls.as_mut_slice();
        for i in 0..count {
            if slice[i].is_off_table() {
                continue;
            }

            let ball = &mut slice[i];
            integrate(ball, physics.friction, physics.rest_threshold);

            if let Some(hole_idx) = find_capturing_hole(ball, &table.holes) {
                if ball.is_cue() {
                    log::info!("cue ball pocketed in hole {}", hole_idx);
                    ball.send_off_table();
                    report.cue_ball_pocketed = true;
                } else {
                    log::info!("ball {} ({:?}) pocketed in hole {}", ball.id, ball.colour, hole_idx);
                    ball.moving = false;
                    pocketed[i] = true;
                }
                continue;
            }

            let playable = table.playable_area(ball.radius);
            if resolve_cushion(ball, &playable, physics.cushion_restitution).any() {
                report.cushion_hits += 1;
            }

            if ball.collision_cooldown > 0 {
                ball.collision_cooldown -= 1;
                continue;
            }
            report.collisions += collide_with_others(table, slice, i, &pocketed, physics);
        }
    }

    for (ball, _) in balls.iter().zip(&pocketed).filter(|(_, flag)| **flag) {
        report.pocketed.insert(ball.id);
    }
    balls.remove_pocketed(&pocketed);

    let any_moving = balls.is_any_ball_moving();
    // A cue ball dropped this tick stays on the sentinel for at least one report
    let waiting_cue = !report.cue_ball_pocketed && balls.cue().is_some_and(Ball::is_off_table);
    if !any_moving && waiting_cue {
        let spot = respot_position(table, balls);
        if let Some(cue) = balls.cue_mut() {
            cue.respot(spot);
            log::info!("cue ball returned to {:?}", spot);
        }
        report.cue_ball_returned_home = true;
    }
    if let Some(cue) = balls.cue_mut() {
        let on_table = !cue.is_off_table();
        if let Some(state) = cue.cue_state_mut() {
            state.shootable = !any_moving && on_table;
        }
    }

    log::trace!(
        "tick: {} collisions, {} cushion hits, {} pocketed, moving={}",
        report.collisions,
        report.cushion_hits,
        report.pocketed.len(),
        any_moving
    );
    report
}

/// Resolves contacts between ball `i` and every other eligible ball, in set order.
fn collide_with_others(
    table: &Table,
    slice: &mut [Ball],
    i: usize,
    pocketed: &[bool],
    physics: &PhysicsConfig,
) -> usize {
    let mut collisions = 0;
    for j in 0..slice.len() {
        if j == i || pocketed[j] || slice[j].is_off_table() || slice[j].collision_cooldown > 0 {
            continue;
        }
        let Some(manifold) = check_ball_ball(&slice[i], i, &slice[j], j) else {
            continue;
        };

        let (ball_a, ball_b) = pair_mut(slice, i, j);
        let resolution = resolve_ball_collision(ball_a, ball_b, &manifold, physics.restitution);
        log::debug!(
            "collision {} -> {}: depth {:.3}, transfer {:.3}",
            ball_a.id,
            ball_b.id,
            manifold.depth,
            resolution.transfer
        );

        for ball in [&mut *ball_a, &mut *ball_b] {
            // Separation may push a ball lying on a cushion past it
            ball.position = table.playable_area(ball.radius).clamp(ball.position);
            ball.moving = ball.speed() > physics.rest_threshold;
            ball.collision_cooldown = physics.collision_delay;
        }
        collisions += 1;

        // A cooling ball may not collide with anything else this tick
        if slice[i].collision_cooldown > 0 {
            break;
        }
    }
    collisions
}

/// Mutable references to two distinct balls, in argument order.
fn pair_mut(slice: &mut [Ball], i: usize, j: usize) -> (&mut Ball, &mut Ball) {
    debug_assert_ne!(i, j);
    if i < j {
        let (head, tail) = slice.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = slice.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}

/// Where a pocketed cue ball goes back on.
///
/// The home spot if no ball covers it; otherwise the first free spot stepping
/// one ball diameter at a time from home towards the nearer short cushion.
fn respot_position(table: &Table, balls: &BallSet) -> Vec2 {
    let Some(cue) = balls.cue() else {
        return Vec2::ZERO;
    };
    let Some(home) = cue.cue_state().map(|state| state.home) else {
        return cue.position;
    };
    let radius = cue.radius;
    if radius <= 0.0 || !radius.is_finite() {
        log::warn!("cue ball radius {} cannot step off home; re-spotting on {:?}", radius, home);
        return home;
    }
    let playable = table.playable_area(radius);

    let is_free = |spot: Vec2| {
        let footprint = Circle::new(spot, radius);
        balls
            .iter()
            .filter(|b| !b.is_cue() && !b.is_off_table())
            .all(|b| !b.footprint().overlaps(&footprint))
            && !table.holes.iter().any(|h| h.mouth().contains(spot, 0.5 * radius))
    };

    if is_free(home) {
        return home;
    }

    let step_x = if home.x <= playable.center().x {
        -2.0 * radius
    } else {
        2.0 * radius
    };
    let mut spot = home;
    loop {
        spot.x += step_x;
        if !playable.contains(spot) {
            break;
        }
        if is_free(spot) {
            log::info!("cue ball home {:?} is covered; re-spotting at {:?}", home, spot);
            return spot;
        }
    }

    log::warn!("no free spot on the cue ball's line; re-spotting on home {:?} regardless", home);
    home
}
