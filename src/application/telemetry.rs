//! Per-spin telemetry: the velocity decay curve of the most recent spin,
//! kept for the plot panel and for headless reporting.

/// Velocity samples of one spin, one point per frame.
#[derive(Debug, Clone, Default)]
pub struct SpinTrace {
    points: Vec<[f64; 2]>,
}

impl SpinTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the trace at the start of a spin.
    pub fn begin(&mut self) {
        self.points.clear();
    }

    pub fn record(&mut self, frame: u64, velocity: f32) {
        self.points.push([frame as f64, velocity as f64]);
    }

    /// `(frame, rad/frame)` samples in frame order.
    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn frames(&self) -> usize {
        self.points.len()
    }

    /// Peak velocity of the recorded spin, zero when empty.
    pub fn peak_velocity(&self) -> f64 {
        self.points.iter().map(|p| p[1]).fold(0.0, f64::max)
    }
}
