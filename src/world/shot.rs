use crate::common::ShotConfig;
use crate::math::vec2::Vec2;
use crate::objects::BallSet;

/// Result of a shot request. Rejections are not errors; the table is simply left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    Taken,
    /// Some ball is still moving.
    TableInMotion,
    /// The cue ball is pocketed and waiting to be re-spotted.
    CueBallOffTable,
    /// The requested speed was zero or not a number.
    NoPower,
    /// The aim point is the cue ball's own centre.
    NoDirection,
}

/// Strikes the cue ball towards `aim` at `speed`, clamped to `shot.max_speed`.
///
/// Only takes effect while every ball is at rest.
pub fn shoot(balls: &mut BallSet, aim: Vec2, speed: f64, shot: &ShotConfig) -> ShotOutcome {
    if balls.is_any_ball_moving() {
        log::debug!("shot ignored: balls still moving");
        return ShotOutcome::TableInMotion;
    }
    let Some(cue) = balls.cue_mut() else {
        log::warn!("shot ignored: no cue ball in the set");
        return ShotOutcome::CueBallOffTable;
    };
    if cue.is_off_table() {
        log::debug!("shot ignored: cue ball is off the table");
        return ShotOutcome::CueBallOffTable;
    }

    let speed = speed.max(0.0).min(shot.max_speed);
    if speed <= 0.0 {
        log::debug!("shot ignored: no power");
        return ShotOutcome::NoPower;
    }
    let Some(velocity) = cue.aim_velocity(aim, speed) else {
        log::debug!("shot ignored: aim point {:?} is the cue ball centre", aim);
        return ShotOutcome::NoDirection;
    };

    cue.velocity = velocity;
    cue.moving = true;
    if let Some(state) = cue.cue_state_mut() {
        state.shootable = false;
    }
    log::info!("shot towards {:?} at speed {:.2}", aim, speed);
    ShotOutcome::Taken
}
