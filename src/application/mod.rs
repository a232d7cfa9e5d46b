// Spin orchestration and frame scheduling
pub mod spinner;

// Per-spin velocity traces
pub mod telemetry;

pub use spinner::{
    FixedImpulse, FrameScheduler, ManualScheduler, RandomImpulse, SpinHooks, SpinImpulse, Spinner,
};
pub use telemetry::SpinTrace;
