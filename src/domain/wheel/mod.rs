// Wedge partition and pointer math
pub mod geometry;

// Working-choice substitution policy
pub mod rotation;

// Frame-based spin state machine
pub mod spin;

pub use geometry::{MAX_WEDGES, POINTER_ANGLE, WedgeRing, normalize_angle};
pub use rotation::ChoiceRotation;
pub use spin::{SpinPhase, SpinTuning, StepResult, WheelState};
