//! Animation timing for the trace progress value.
//!
//! The state machine owns no clocks: the caller feeds it elapsed wall time
//! each frame and reads back the current progress. Pausing simply stops the
//! accumulation; the partial interval is kept and counted after resume.

/// Milliseconds between progress steps.
const STEP_INTERVAL_MS: f32 = 10.0;

/// Progress added per step at 1.0× speed.
const DEFAULT_STEP: f32 = 0.01;

/// Multiplier applied per speed-up adjustment (+10%).
const SPEED_UP_FACTOR: f32 = 1.1;

/// Multiplier applied per slow-down adjustment (−10%).
const SLOW_DOWN_FACTOR: f32 = 0.9;

/// Progress driver for one trace animation.
///
/// Progress advances by `DEFAULT_STEP × multiplier` once per elapsed
/// [`STEP_INTERVAL_MS`], while unpaused and below 1.0. The final step may
/// land slightly past 1.0; consumers clamp on use.
#[derive(Debug, Clone)]
pub struct Animation {
    progress: f32,
    speed_multiplier: f32,
    paused: bool,
    elapsed_ms: f32,
}

impl Animation {
    pub fn new() -> Self {
        Self {
            progress: 0.0,
            speed_multiplier: 1.0,
            paused: false,
            elapsed_ms: 0.0,
        }
    }

    /// Restarts the animation from zero progress, unpaused.
    ///
    /// The speed multiplier is kept; only a full [`reset`](Self::reset)
    /// returns it to 1.0×.
    pub fn start(&mut self) {
        self.progress = 0.0;
        self.paused = false;
        self.elapsed_ms = 0.0;
    }

    /// Returns everything to the initial state, including speed.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Accumulates `dt_ms` of wall time and advances progress when a full
    /// step interval has elapsed.
    pub fn tick(&mut self, dt_ms: f32) {
        if self.paused {
            return;
        }

        self.elapsed_ms += dt_ms;
        if self.elapsed_ms >= STEP_INTERVAL_MS && self.progress < 1.0 {
            self.progress += DEFAULT_STEP * self.speed_multiplier;
            self.elapsed_ms = 0.0;
        }
    }

    pub fn toggle_paused(&mut self) {
        self.paused = !self.paused;
    }

    /// +10% speed.
    pub fn speed_up(&mut self) {
        self.speed_multiplier *= SPEED_UP_FACTOR;
    }

    /// −10% speed (compounding, so repeated presses converge toward zero
    /// without reaching it).
    pub fn slow_down(&mut self) {
        self.speed_multiplier *= SLOW_DOWN_FACTOR;
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[inline]
    pub fn speed_multiplier(&self) -> f32 {
        self.speed_multiplier
    }

    #[inline]
    pub fn paused(&self) -> bool {
        self.paused
    }

    /// True once progress has reached the end of the curve.
    #[inline]
    pub fn finished(&self) -> bool {
        self.progress >= 1.0
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_advance_below_step_interval() {
        let mut anim = Animation::new();
        anim.tick(5.0);
        assert_eq!(anim.progress(), 0.0);
        anim.tick(5.0);
        assert!(anim.progress() > 0.0);
    }

    #[test]
    fn step_size_scales_with_multiplier() {
        let mut anim = Animation::new();
        anim.speed_up();
        anim.tick(10.0);
        assert!((anim.progress() - 0.011).abs() < 1e-6);
    }

    #[test]
    fn paused_animation_holds_progress() {
        let mut anim = Animation::new();
        anim.tick(10.0);
        anim.tick(5.0); // partial interval
        let before = anim.progress();

        anim.toggle_paused();
        anim.tick(500.0);
        assert_eq!(anim.progress(), before);

        // The partial interval survives the pause and completes after
        // resume.
        anim.toggle_paused();
        anim.tick(5.0);
        assert!(anim.progress() > before);
    }

    #[test]
    fn progress_stops_stepping_at_one() {
        let mut anim = Animation::new();
        for _ in 0..200 {
            anim.tick(10.0);
        }
        assert!(anim.finished());
        // One step may overshoot, but never more than that.
        assert!(anim.progress() <= 1.0 + DEFAULT_STEP);
    }

    #[test]
    fn start_keeps_speed_reset_restores_it() {
        let mut anim = Animation::new();
        anim.speed_up();
        anim.start();
        assert!((anim.speed_multiplier() - 1.1).abs() < 1e-6);

        anim.reset();
        assert_eq!(anim.speed_multiplier(), 1.0);
    }

    #[test]
    fn speed_steps_compound() {
        let mut anim = Animation::new();
        anim.speed_up();
        anim.speed_up();
        assert!((anim.speed_multiplier() - 1.21).abs() < 1e-4);

        // Up and down do not cancel exactly: ×1.1 then ×0.9 is ×0.99.
        anim.slow_down();
        anim.slow_down();
        assert!((anim.speed_multiplier() - 0.9801).abs() < 1e-4);
    }
}
