mod css;
mod geometry;

pub use css::*;
pub use geometry::*;
