//! Owned curve types built on the De Casteljau engines.

mod bezier;

pub use bezier::BezierCurve;
