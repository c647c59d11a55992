//! Point types for control polygons.

mod vec2;

pub use vec2::Vec2;
