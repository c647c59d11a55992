//! Vector addition and scalar multiplication operations.
//!
//! Any closure with the right signature is an operation. [`Plus`] and
//! [`Scale`] are the defaults used when a caller supplies none.

use std::ops::{Add, Mul};

/// Vector addition, `V × V -> V`.
pub trait VectorAddition<V> {
    /// Adds two vectors.
    fn add(&self, v: V, u: V) -> V;
}

/// Left scalar multiplication, `S × V -> V`.
pub trait ScalarMultiplication<S, V> {
    /// Multiplies a vector by a scalar.
    fn mul(&self, a: S, v: V) -> V;
}

impl<V, F> VectorAddition<V> for F
where
    F: Fn(V, V) -> V,
{
    #[inline]
    fn add(&self, v: V, u: V) -> V {
        self(v, u)
    }
}

impl<S, V, F> ScalarMultiplication<S, V> for F
where
    F: Fn(S, V) -> V,
{
    #[inline]
    fn mul(&self, a: S, v: V) -> V {
        self(a, v)
    }
}

/// Native vector addition through [`Add`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Plus;

impl<V> VectorAddition<V> for Plus
where
    V: Add<Output = V>,
{
    #[inline]
    fn add(&self, v: V, u: V) -> V {
        v + u
    }
}

/// Left scalar multiplication through `S: Mul<V, Output = V>`.
///
/// With `V = S` this is the scalar field viewed as a one-dimensional vector
/// space. For a point type it requires `impl Mul<Point> for Scalar`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scale;

impl<S, V> ScalarMultiplication<S, V> for Scale
where
    S: Mul<V, Output = V>,
{
    #[inline]
    fn mul(&self, a: S, v: V) -> V {
        a * v
    }
}
