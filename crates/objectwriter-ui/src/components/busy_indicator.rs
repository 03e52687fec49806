//! Indeterminate progress animation.
//!
//! iced's progress bar only shows a known fraction, so the indicator sweeps
//! its value back and forth on every tick while a build runs.

/// Progress added per tick, out of 100.
const STEP: f32 = 2.5;

/// Ping-pong progress value.
#[derive(Debug, Clone, PartialEq)]
pub struct BusyIndicator {
    running: bool,
    value: f32,
    forward: bool,
}

impl BusyIndicator {
    pub fn new() -> Self {
        Self {
            running: false,
            value: 0.0,
            forward: true,
        }
    }

    /// Starts animating from the left edge.
    pub fn start(&mut self) {
        self.running = true;
        self.value = 0.0;
        self.forward = true;
    }

    /// Stops and resets.
    pub fn stop(&mut self) {
        self.running = false;
        self.value = 0.0;
        self.forward = true;
    }

    /// Advances one frame. Does nothing while stopped.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }

        if self.forward {
            self.value += STEP;
            if self.value >= 100.0 {
                self.value = 100.0;
                self.forward = false;
            }
        } else {
            self.value -= STEP;
            if self.value <= 0.0 {
                self.value = 0.0;
                self.forward = true;
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current bar value in `0.0..=100.0`.
    pub fn value(&self) -> f32 {
        self.value
    }
}

impl Default for BusyIndicator {
    fn default() -> Self {
        Self::new()
    }
}
