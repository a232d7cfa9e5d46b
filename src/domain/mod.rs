// Menu of dishes and its editing operations
pub mod menu;

// Wheel geometry, spin physics, and choice rotation
pub mod wheel;

// Domain-specific error types
pub mod errors;
