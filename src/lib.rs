//! casteljau - De Casteljau's algorithm over arbitrary vector spaces
//!
//! Evaluates and subdivides polynomials in Bernstein (Bézier) form by
//! repeated linear interpolation. The point type is anything with a vector
//! addition and a scalar multiplication: numbers, complex values, 2D and 3D
//! points, or a custom type with its own operations. Operation sets that do
//! not form a vector space over the point type are rejected at compile time.
//!
//! ```
//! use casteljau::{evaluate, subdivide};
//!
//! let mut coefficients = [0.0, 2.0, 4.0, 6.0, 8.0];
//! let mut halves = [0.0; 9];
//!
//! subdivide(&coefficients, &mut halves, 0.5);
//! assert_eq!(halves, [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
//!
//! assert_eq!(evaluate(&mut coefficients, 0.5).copied(), Some(4.0));
//! ```

pub mod algebra;
pub mod casteljau;
pub mod curves;
pub mod error;
pub mod primitives;
#[cfg(feature = "simd")]
pub mod simd;

pub use algebra::{
    AlgebraicVector, Field, NativeAlgebra, ScalarMultiplication, VectorAddition, VectorSpace,
    VectorSpaceAlgebra,
};
pub use casteljau::{
    evaluate, evaluate_in, evaluate_range, evaluate_with, subdivide, subdivide_in,
    subdivide_range, subdivide_with, subdivided_len, try_subdivide_in,
};
pub use curves::BezierCurve;
pub use error::SplineError;
pub use primitives::Vec2;
