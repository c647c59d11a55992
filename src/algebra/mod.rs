//! Vector space algebras over arbitrary point types.
//!
//! An algebra is a scalar type plus two operations: vector addition and
//! left scalar multiplication. [`VectorSpace`] is the capability check the
//! engines are bounded by, so an operation set that does not type-check as a
//! vector space over the point type is rejected at compile time.

mod algebraic;
mod field;
mod ops;
mod space;

pub use algebraic::AlgebraicVector;
pub use field::Field;
pub use ops::{Plus, Scale, ScalarMultiplication, VectorAddition};
pub use space::{NativeAlgebra, VectorSpace, VectorSpaceAlgebra};
