//! Frame-based spin state and the velocity-decay step.
//!
//! The model is deliberately frame-count based, not wall-clock based: one
//! step per animation frame, so perceived spin duration tracks the display
//! refresh rate. That matches the feel the wheel is tuned for and keeps
//! every step a pure function of the previous state.

use super::geometry::{WedgeRing, normalize_angle};

/// Lifecycle of a spin. A settled wheel can be spun again; a spinning wheel
/// ignores further triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinPhase {
    Idle,
    Spinning,
    Settled,
}

/// Knobs for the deceleration curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinTuning {
    /// Multiplier applied to the velocity once per frame.
    pub decay: f32,
    /// Velocities below this floor (rad/frame) clamp straight to zero,
    /// which is what ends a spin in bounded time.
    pub floor: f32,
}

impl Default for SpinTuning {
    fn default() -> Self {
        Self {
            decay: 0.99,
            floor: 0.005,
        }
    }
}

/// What one frame step produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Set when the pointer-aligned wedge changed this frame.
    pub crossed_into: Option<usize>,
    /// True on the single frame where velocity clamps to zero.
    pub settled: bool,
}

/// Mutable spin state, owned by exactly one controller.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelState {
    /// Current rotation, always in `[0, TAU)`.
    pub angle: f32,
    /// Current angular velocity in rad/frame, never negative.
    pub velocity: f32,
    /// Wedge aligned with the pointer on the most recent frame; crossing
    /// detection compares against this.
    pub pointer_index: usize,
    pub phase: SpinPhase,
}

impl WheelState {
    /// A wheel at rest at `angle`, ready to spin.
    pub fn at_rest(angle: f32, ring: &WedgeRing) -> Self {
        let angle = normalize_angle(angle);
        Self {
            angle,
            velocity: 0.0,
            pointer_index: ring.index_at_pointer(angle),
            phase: SpinPhase::Idle,
        }
    }

    /// Arms a spin with the given initial velocity. Returns `false` without
    /// touching any state if a spin is already running.
    pub fn begin(&mut self, velocity: f32) -> bool {
        if self.phase == SpinPhase::Spinning {
            return false;
        }
        self.velocity = velocity.max(0.0);
        self.phase = SpinPhase::Spinning;
        true
    }

    /// Advances one animation frame.
    ///
    /// Order matters and is observable: the angle advances by the current
    /// velocity first, then the crossing check runs, then the velocity
    /// decays (clamping to exactly zero below the floor). A spin therefore
    /// settles on the same frame its velocity first drops under the floor.
    pub fn step(&mut self, ring: &WedgeRing, tuning: SpinTuning) -> StepResult {
        self.angle = normalize_angle(self.angle + self.velocity);

        let index = ring.index_at_pointer(self.angle);
        let crossed_into = (index != self.pointer_index).then_some(index);
        self.pointer_index = index;

        self.velocity = if self.velocity < tuning.floor {
            0.0
        } else {
            self.velocity * tuning.decay
        };

        let settled = self.velocity == 0.0;
        if settled {
            self.phase = SpinPhase::Settled;
        }

        StepResult {
            crossed_into,
            settled,
        }
    }
}
