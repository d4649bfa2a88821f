//! Initial ball placement.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::common::{RackLayout, SimulationConfig};
use crate::math::vec2::Vec2;
use crate::objects::{Ball, BallColour, BallId, BallSet};

pub const OBJECT_BALL_COUNT: usize = 15;

/// Id of the cue ball in every rack.
pub const CUE_BALL_ID: BallId = BallId(0);

// Row-major over the triangle, apex first. Black sits in the middle of the third row.
const TRIANGLE_COLOURS: [BallColour; OBJECT_BALL_COUNT] = {
    use BallColour::{Black as B, Red as R, Yellow as Y};
    [R, Y, R, R, B, Y, Y, R, Y, R, R, Y, Y, R, Y]
};

// Seven red, seven yellow, then the black.
const ROW_COLOURS: [BallColour; OBJECT_BALL_COUNT] = {
    use BallColour::{Black as B, Red as R, Yellow as Y};
    [R, R, R, R, R, R, R, Y, Y, Y, Y, Y, Y, Y, B]
};

/// Object ball centres for a rack.
///
/// For a triangle `spot` is the apex, which points towards the cue ball
/// (-x); rows spread towards +x. For a row `spot` is the centre ball.
/// Neighbours are `2 * radius + gap` apart.
pub fn rack_positions(
    layout: RackLayout,
    spot: Vec2,
    radius: f64,
    gap: f64,
) -> [Vec2; OBJECT_BALL_COUNT] {
    let spacing = 2.0 * radius + gap;
    let mut positions = [Vec2::ZERO; OBJECT_BALL_COUNT];

    match layout {
        RackLayout::Triangle => {
            let row_offset = spacing * 3.0f64.sqrt() / 2.0;
            let mut idx = 0;
            for row in 0..5 {
                for k in 0..=row {
                    let lateral = k as f64 - row as f64 / 2.0;
                    positions[idx] = Vec2::new(
                        spot.x + row as f64 * row_offset,
                        spot.y + lateral * spacing,
                    );
                    idx += 1;
                }
            }
        }
        RackLayout::Row => {
            let middle = (OBJECT_BALL_COUNT / 2) as f64;
            for (i, position) in positions.iter_mut().enumerate() {
                *position = Vec2::new(spot.x + spacing * (i as f64 - middle), spot.y);
            }
        }
    }
    positions
}

/// Racks a fresh set: the cue ball on its home spot, then fifteen object balls.
pub fn rack_balls(config: &SimulationConfig) -> BallSet {
    let layout = &config.balls;
    let colours = match layout.rack {
        RackLayout::Triangle => &TRIANGLE_COLOURS,
        RackLayout::Row => &ROW_COLOURS,
    };
    let positions = rack_positions(layout.rack, layout.rack_spot, layout.radius, layout.rack_gap);

    let mut balls = BallSet::new();
    balls.push(Ball::cue(CUE_BALL_ID, layout.cue_home, layout.radius));
    for (i, (&position, &colour)) in positions.iter().zip(colours.iter()).enumerate() {
        balls.push(Ball::object(BallId(i as u32 + 1), colour, position, layout.radius));
    }

    log::info!(
        "racked {} object balls ({:?}) and cue ball at {:?}",
        balls.object_count(),
        layout.rack,
        layout.cue_home
    );
    balls
}

/// Sends every object ball off at `speed` in a random direction. The same seed gives the same break.
pub fn scatter(balls: &mut BallSet, seed: u64, speed: f64) {
    let mut rng = Pcg64::seed_from_u64(seed);
    for ball in balls.iter_mut().filter(|b| !b.is_cue() && !b.is_off_table()) {
        let angle = rng.gen_range(0.0..std::f64::consts::TAU);
        ball.velocity = Vec2::new(speed, 0.0).rotate(angle);
        ball.moving = speed > 0.0;
    }
    log::debug!("scattered object balls at speed {} (seed {})", speed, seed);
}
