use crate::config::{MAX_CATCH_UP_STEPS, STEP};

/// Turns variable display-frame deltas into whole fixed simulation steps.
#[derive(Debug, Default)]
pub struct FrameTimer {
    accumulator: f32,
    fps_accum: f32,
    fps_frames: u32,
    fps: f32,
}

impl FrameTimer {
    pub fn accumulate(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.accumulator += dt;
        self.fps_accum += dt;
        self.fps_frames += 1;
        let max_accum = STEP * MAX_CATCH_UP_STEPS;
        if self.accumulator > max_accum {
            self.accumulator = max_accum;
        }
        if self.fps_accum >= 0.5 {
            self.fps = self.fps_frames as f32 / self.fps_accum.max(1e-5);
            self.fps_accum = 0.0;
            self.fps_frames = 0;
        }
    }

    /// Consumes one step from the backlog if a whole one is available.
    pub fn take_step(&mut self) -> bool {
        if self.accumulator >= STEP {
            self.accumulator -= STEP;
            true
        } else {
            false
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}
