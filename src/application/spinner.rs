//! Spin orchestration: owns the wheel state, runs the per-frame loop, and
//! reports crossings and the final result to the caller.

use crate::domain::errors::WheelError;
use crate::domain::menu::Choice;
use crate::domain::wheel::{ChoiceRotation, SpinPhase, SpinTuning, WedgeRing, WheelState};
use std::cell::Cell;
use tracing::{debug, info};

/// "Schedule one more animation frame" seam.
///
/// The GUI maps this to an egui repaint request; headless callers drive the
/// loop themselves. Scheduling is request-only: nothing holds a callback
/// into the spinner, so dropping the spinner cancels the animation outright
/// and a pending request can never reach a torn-down wheel.
pub trait FrameScheduler {
    fn request_frame(&self);
}

/// Scheduler for headless runs and tests: counts requests instead of
/// scheduling anything.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    requested: Cell<u64>,
}

impl ManualScheduler {
    pub fn requested(&self) -> u64 {
        self.requested.get()
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&self) {
        self.requested.set(self.requested.get() + 1);
    }
}

/// Source of initial spin velocities, swappable for deterministic tests.
pub trait SpinImpulse {
    /// Draws one initial velocity in rad/frame.
    fn draw_velocity(&mut self) -> f32;
}

/// Uniform random impulse over `[base, base + range]` degrees per frame.
#[derive(Debug, Clone, Copy)]
pub struct RandomImpulse {
    pub base_deg: f32,
    pub range_deg: f32,
}

impl SpinImpulse for RandomImpulse {
    fn draw_velocity(&mut self) -> f32 {
        use rand::Rng;
        let deg = self.base_deg + rand::rng().random_range(0.0..=self.range_deg);
        deg.to_radians()
    }
}

/// Fixed impulse for reproducible spins.
#[derive(Debug, Clone, Copy)]
pub struct FixedImpulse(pub f32);

impl SpinImpulse for FixedImpulse {
    fn draw_velocity(&mut self) -> f32 {
        self.0
    }
}

/// Callbacks for one spin.
///
/// `on_update` fires on every crossing event with the choice newly aligned
/// with the pointer; `on_spin_end` fires exactly once, on the frame the
/// velocity clamps to zero, with the final angle and final choice.
#[derive(Default)]
pub struct SpinHooks {
    on_update: Option<Box<dyn FnMut(&Choice)>>,
    on_spin_end: Option<Box<dyn FnOnce(f32, &Choice)>>,
}

impl SpinHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_update(mut self, hook: impl FnMut(&Choice) + 'static) -> Self {
        self.on_update = Some(Box::new(hook));
        self
    }

    pub fn on_spin_end(mut self, hook: impl FnOnce(f32, &Choice) + 'static) -> Self {
        self.on_spin_end = Some(Box::new(hook));
        self
    }
}

/// The wheel engine: spin state, working choices, and the frame loop.
///
/// Single-owner and single-threaded; every mutation happens through
/// [`Spinner::spin`] or [`Spinner::tick`] on the owning thread.
pub struct Spinner {
    ring: WedgeRing,
    tuning: SpinTuning,
    state: WheelState,
    rotation: ChoiceRotation,
    hooks: SpinHooks,
    frames: u64,
}

impl Spinner {
    /// Builds a wheel at rest at angle zero.
    pub fn new(
        ring: WedgeRing,
        tuning: SpinTuning,
        choices: Vec<Choice>,
    ) -> Result<Self, WheelError> {
        Self::resumed_at(ring, tuning, choices, 0.0)
    }

    /// Builds a wheel resting at a previously settled angle, so a restart
    /// shows the wheel exactly where the last session left it.
    pub fn resumed_at(
        ring: WedgeRing,
        tuning: SpinTuning,
        choices: Vec<Choice>,
        angle: f32,
    ) -> Result<Self, WheelError> {
        let rotation = ChoiceRotation::new(&ring, choices)?;
        let state = WheelState::at_rest(angle, &ring);
        Ok(Self {
            ring,
            tuning,
            state,
            rotation,
            hooks: SpinHooks::new(),
            frames: 0,
        })
    }

    pub fn state(&self) -> &WheelState {
        &self.state
    }

    /// Choices currently assigned to wedges, in wedge order. This is what
    /// the renderer labels the wheel with.
    pub fn working(&self) -> &[Choice] {
        self.rotation.working()
    }

    /// The choice currently aligned with the pointer.
    pub fn aligned_choice(&self) -> &Choice {
        &self.rotation.working()[self.state.pointer_index]
    }

    pub fn is_spinning(&self) -> bool {
        self.state.phase == SpinPhase::Spinning
    }

    /// Frames stepped so far in the current (or most recent) spin.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Begins a spin with the given initial velocity (rad/frame) and
    /// installs the hooks for it. A call while a spin is already running is
    /// a no-op: state, working choices, and the pending hooks all stay
    /// untouched, and `false` is returned.
    pub fn spin(&mut self, velocity: f32, hooks: SpinHooks) -> bool {
        if !self.state.begin(velocity) {
            debug!("Spin request ignored; wheel is already spinning");
            return false;
        }
        self.hooks = hooks;
        self.frames = 0;
        info!("Spin started at {:.4} rad/frame", self.state.velocity);
        true
    }

    /// Advances one animation frame while spinning.
    ///
    /// Fires `on_update` on crossings and, on the settling frame,
    /// `on_spin_end`; otherwise asks the scheduler for the next frame. A
    /// tick on an idle or settled wheel does nothing.
    pub fn tick(&mut self, scheduler: &dyn FrameScheduler) {
        if self.state.phase != SpinPhase::Spinning {
            return;
        }

        let result = self.state.step(&self.ring, self.tuning);
        self.frames += 1;

        if let Some(index) = result.crossed_into {
            let aligned = self.rotation.on_crossing(&self.ring, index);
            if let Some(hook) = self.hooks.on_update.as_mut() {
                hook(aligned);
            }
        }

        if result.settled {
            let winner = &self.rotation.working()[self.state.pointer_index];
            info!(
                "Settled on '{}' after {} frames at angle {:.4}",
                winner.label, self.frames, self.state.angle
            );
            if let Some(hook) = self.hooks.on_spin_end.take() {
                hook(self.state.angle, winner);
            }
        } else {
            scheduler.request_frame();
        }
    }
}
