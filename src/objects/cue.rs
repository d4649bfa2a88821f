//! Cue-ball behaviour: shot projection, pocketing and re-spotting.

use super::ball::{Ball, BallKind, CueState};
use crate::common::ShotConfig;
use crate::math::vec2::Vec2;

impl Ball {
    pub fn cue_state(&self) -> Option<&CueState> {
        match &self.kind {
            BallKind::Cue(state) => Some(state),
            BallKind::Object => None,
        }
    }

    pub fn cue_state_mut(&mut self) -> Option<&mut CueState> {
        match &mut self.kind {
            BallKind::Cue(state) => Some(state),
            BallKind::Object => None,
        }
    }

    /// Parks the ball on the sentinel position with no velocity.
    pub fn send_off_table(&mut self) {
        self.position = Ball::OFF_TABLE;
        self.velocity = Vec2::ZERO;
        self.moving = false;
        self.collision_cooldown = 0;
    }

    /// Places the ball back on the table at rest.
    pub fn respot(&mut self, position: Vec2) {
        self.position = position;
        self.velocity = Vec2::ZERO;
        self.moving = false;
        self.collision_cooldown = 0;
    }

    /// Velocity that sends this ball towards `target` at `speed`.
    /// `None` when the target coincides with the ball centre.
    pub fn aim_velocity(&self, target: Vec2, speed: f64) -> Option<Vec2> {
        (target - self.position)
            .try_normalize()
            .map(|direction| direction * speed)
    }
}

/// Launch speed for a shot button held for `held_seconds`, clamped to the configured maximum.
pub fn shot_speed(held_seconds: f64, shot: &ShotConfig) -> f64 {
    if !held_seconds.is_finite() || held_seconds <= 0.0 {
        return 0.0;
    }
    (shot.speed_per_second * held_seconds).min(shot.max_speed)
}
