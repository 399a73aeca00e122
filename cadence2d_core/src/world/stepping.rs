//! Fixed-timestep accumulation and FPS measurement.

use tracing::warn;

/// Wake-up gaps longer than this are treated as a pause (suspended process,
/// dragged window, first tick after a long setup) and discarded instead of
/// being replayed as a burst of catch-up steps.
const SPIKE_CUTOFF: f32 = 0.25;

/// Converts irregular wake-up intervals into a deterministic count of
/// fixed-size physics quanta.
///
/// Elapsed time is banked into an accumulator; each call to [`advance`]
/// drains whole quanta and carries the remainder, so the simulation advances
/// by the same fixed amount regardless of jitter in wake-up timing.
///
/// [`advance`]: StepClock::advance
#[derive(Debug, Clone)]
pub struct StepClock {
    time_step: f32,
    accumulator: f32,
}

impl StepClock {
    pub fn new(time_step: f32) -> Self {
        Self {
            time_step,
            accumulator: 0.0,
        }
    }

    /// Seconds advanced by one quantum.
    pub fn time_step(&self) -> f32 {
        self.time_step
    }

    /// Change the quantum size. Takes effect from the next [`advance`];
    /// already-banked time is consumed in quanta of the new size.
    ///
    /// [`advance`]: StepClock::advance
    pub fn set_time_step(&mut self, time_step: f32) {
        self.time_step = time_step;
    }

    /// Leftover elapsed time not yet consumed by a full quantum. Always in
    /// `[0, time_step)` after an [`advance`].
    ///
    /// [`advance`]: StepClock::advance
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    /// Bank `elapsed` seconds and return how many whole quanta to step.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        if !elapsed.is_finite() || elapsed < 0.0 {
            return 0;
        }
        if elapsed > SPIKE_CUTOFF {
            warn!(
                elapsed,
                cutoff = SPIKE_CUTOFF,
                "elapsed-time spike, dropping accumulated time"
            );
            self.accumulator = 0.0;
            return 0;
        }

        self.accumulator += elapsed;
        let mut steps = 0;
        while self.accumulator >= self.time_step {
            self.accumulator -= self.time_step;
            steps += 1;
        }
        steps
    }

    /// Drop any banked time. Called on `start()` so a paused interval
    /// contributes zero steps.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

/// Rolling one-second window counting wake-ups.
///
/// Observational only; the measured rate never feeds back into stepping.
#[derive(Debug, Clone, Default)]
pub struct FpsMeter {
    window: f32,
    frames: u32,
    last: f32,
}

impl FpsMeter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one wake-up spanning `elapsed` seconds. Returns the measured
    /// rate each time the window closes.
    pub fn frame(&mut self, elapsed: f32) -> Option<f32> {
        self.window += elapsed;
        self.frames += 1;
        if self.window >= 1.0 {
            self.last = self.frames as f32 / self.window;
            self.window = 0.0;
            self.frames = 0;
            Some(self.last)
        } else {
            None
        }
    }

    /// Last completed measurement, 0.0 before the first window closes.
    pub fn fps(&self) -> f32 {
        self.last
    }

    pub fn reset(&mut self) {
        self.window = 0.0;
        self.frames = 0;
    }
}
