//! Keyframe animation families.

pub mod bounce_and_spin;

pub use bounce_and_spin::BounceAndSpin;
