use crate::common::{ConfigError, SimulationConfig};
use crate::math::vec2::Vec2;
use crate::objects::{shot_speed, BallId, BallSet, BallState};
use crate::world::rack::{rack_balls, scatter};
use crate::world::shot::{shoot, ShotOutcome};
use crate::world::step::{tick, TickReport};
use crate::world::table::{initialize_table, Table};
use crate::world::timestep::FixedTimestep;

/// The whole simulation state, owned by whoever drives the loop.
///
/// Nothing here is global: a presentation layer holds one `Simulation`,
/// feeds it frame times and shot requests, and reads ball states back.
pub struct Simulation {
    config: SimulationConfig,
    table: Table,
    balls: BallSet,
    timestep: FixedTimestep,
    tick_count: u64,
}

impl Simulation {
    /// Validates the configuration, lays out the table and racks the balls.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let table = initialize_table(&config.table);
        let balls = rack_balls(&config);
        let timestep = FixedTimestep::from_rate(config.tick_rate);
        Ok(Self {
            config,
            table,
            balls,
            timestep,
            tick_count: 0,
        })
    }

    /// Throws away the current state and re-racks from the configuration.
    pub fn reset(&mut self) {
        self.table = initialize_table(&self.config.table);
        self.balls = rack_balls(&self.config);
        self.timestep.reset();
        self.tick_count = 0;
        log::info!("simulation reset");
    }

    /// Runs exactly one fixed tick.
    pub fn tick(&mut self) -> TickReport {
        self.tick_count += 1;
        tick(&self.table, &mut self.balls, &self.config.physics)
    }

    /// Runs as many fixed ticks as `frame_dt` seconds of wall time cover.
    pub fn advance(&mut self, frame_dt: f64) -> Vec<TickReport> {
        let steps = self.timestep.accumulate(frame_dt);
        (0..steps).map(|_| self.tick()).collect()
    }

    /// Strikes the cue ball towards `aim`. Ignored unless the table is at rest.
    pub fn shoot(&mut self, aim: Vec2, speed: f64) -> ShotOutcome {
        shoot(&mut self.balls, aim, speed, &self.config.shot)
    }

    /// Shot whose speed comes from how long the input was held.
    pub fn shoot_held(&mut self, aim: Vec2, held_seconds: f64) -> ShotOutcome {
        let speed = shot_speed(held_seconds, &self.config.shot);
        self.shoot(aim, speed)
    }

    /// Gives every object ball `speed` in a seeded random direction.
    pub fn scatter(&mut self, seed: u64, speed: f64) {
        scatter(&mut self.balls, seed, speed);
    }

    pub fn is_any_ball_moving(&self) -> bool {
        self.balls.is_any_ball_moving()
    }

    /// True when a shot would currently be accepted.
    pub fn is_shootable(&self) -> bool {
        !self.is_any_ball_moving() && self.balls.cue().is_some_and(|cue| !cue.is_off_table())
    }

    pub fn ball_state(&self, id: BallId) -> Option<BallState> {
        self.balls.get(id).map(|ball| ball.state())
    }

    pub fn ball_states(&self) -> Vec<BallState> {
        self.balls.states()
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn balls(&self) -> &BallSet {
        &self.balls
    }

    /// Direct access for setting up positions, e.g. in scenario tools and tests.
    pub fn balls_mut(&mut self) -> &mut BallSet {
        &mut self.balls
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Seconds per fixed tick.
    pub fn tick_dt(&self) -> f64 {
        self.timestep.dt()
    }

    /// Interpolation factor between the last two ticks, for rendering.
    pub fn alpha(&self) -> f64 {
        self.timestep.alpha()
    }
}
