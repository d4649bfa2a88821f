/// Fixed timestep accumulator.
/// Turns variable frame times into a whole number of fixed simulation ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedTimestep {
    /// Seconds per tick.
    dt: f64,
    /// Frame time not yet consumed by a tick.
    accumulator: f64,
}

impl FixedTimestep {
    /// Most ticks run for a single frame; a long stall drops the excess instead of catching up.
    pub const MAX_STEPS_PER_FRAME: u32 = 10;

    pub fn new(dt: f64) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    pub fn from_rate(ticks_per_second: f64) -> Self {
        Self::new(1.0 / ticks_per_second)
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f64) -> u32 {
        if frame_dt.is_finite() && frame_dt > 0.0 {
            self.accumulator += frame_dt;
        }
        self.accumulator = self
            .accumulator
            .min(self.dt * Self::MAX_STEPS_PER_FRAME as f64);
        // Tolerate rounding when frame_dt is an exact multiple of dt
        let steps = ((self.accumulator / self.dt) + 1e-9).floor() as u32;
        self.accumulator = (self.accumulator - steps as f64 * self.dt).max(0.0);
        steps
    }

    /// Interpolation alpha for rendering between ticks (0.0 to 1.0).
    pub fn alpha(&self) -> f64 {
        self.accumulator / self.dt
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
