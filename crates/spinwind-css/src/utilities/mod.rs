//! Utility class families.

pub mod transform;

pub use transform::Transform;
