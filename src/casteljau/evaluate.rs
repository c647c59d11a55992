//! In-place evaluation by De Casteljau's recurrence.

use std::ops::{Add, Mul, Range};

use crate::algebra::{
    Field, NativeAlgebra, ScalarMultiplication, VectorAddition, VectorSpace, VectorSpaceAlgebra,
};

/// Evaluates a Bernstein-form polynomial at `t` using native `+` and left
/// scalar `*`.
///
/// See [`evaluate_in`] for the buffer contract.
///
/// # Example
///
/// ```
/// use casteljau::evaluate;
///
/// let mut coefficients = [0.0, 2.0, 4.0, 6.0, 8.0];
/// assert_eq!(evaluate(&mut coefficients, 0.5).copied(), Some(4.0));
/// ```
#[inline]
pub fn evaluate<V, S>(coefficients: &mut [V], t: S) -> Option<&mut V>
where
    V: Clone + Add<Output = V>,
    S: Field + Mul<V, Output = V>,
{
    evaluate_in(coefficients, t, &NativeAlgebra::<S>::native())
}

/// Evaluates a Bernstein-form polynomial at `t` with explicit operations.
///
/// The argument order follows the multiplication-then-addition convention of
/// the other `_with` entry points.
#[inline]
pub fn evaluate_with<V, S, M, A>(coefficients: &mut [V], t: S, mul: M, add: A) -> Option<&mut V>
where
    V: Clone,
    S: Field,
    M: ScalarMultiplication<S, V>,
    A: VectorAddition<V>,
{
    evaluate_in(
        coefficients,
        t,
        &VectorSpaceAlgebra::<S, A, M>::new(add, mul),
    )
}

/// Evaluates a Bernstein-form polynomial at `t` within a vector space algebra.
///
/// `coefficients` holds the `n + 1` control values of a degree `n`
/// polynomial and is used as scratch space: round `r` replaces entry `i`
/// with `lerp(c[i], c[i + 1], t)` for `i` in `0..=n - r`, so afterwards only
/// the first entry is meaningful. Returns that entry, or `None` for an empty
/// buffer, in which case nothing is computed.
///
/// Evaluating the reversed coefficients at `1 - t` gives the same value,
/// which is how a caller reaches the other end of each reduction.
///
/// `t` is not range checked; values outside `[0, 1]` extrapolate.
pub fn evaluate_in<'a, V, A>(
    coefficients: &'a mut [V],
    t: A::Scalar,
    algebra: &A,
) -> Option<&'a mut V>
where
    V: Clone,
    A: VectorSpace<V>,
{
    let degree = coefficients.len().checked_sub(1)?;

    for round in 1..=degree {
        for i in 0..=degree - round {
            let a = coefficients[i].clone();
            let b = coefficients[i + 1].clone();
            coefficients[i] = algebra.lerp(a, b, t);
        }
    }

    coefficients.first_mut()
}

/// Evaluates the coefficients in `range` in place.
///
/// An empty or reversed range (`start >= end`) is a no-op returning `None`.
///
/// # Panics
///
/// Panics if `range.end` exceeds the buffer length.
pub fn evaluate_range<'a, V, A>(
    coefficients: &'a mut [V],
    range: Range<usize>,
    t: A::Scalar,
    algebra: &A,
) -> Option<&'a mut V>
where
    V: Clone,
    A: VectorSpace<V>,
{
    if range.start >= range.end {
        return None;
    }
    evaluate_in(&mut coefficients[range], t, algebra)
}
