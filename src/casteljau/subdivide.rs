//! Subdivision by De Casteljau's recurrence.
//!
//! Splitting a degree `n` curve at `t` yields two degree `n` curves sharing
//! one control point. Both are written into a single buffer of `2n + 1`
//! values: `[0, n]` is the left curve, `[n, 2n]` the right one, and index `n`
//! is the value of the original curve at `t`.

use std::ops::{Add, Mul, Range};

use tracing::warn;

use crate::algebra::{
    Field, NativeAlgebra, ScalarMultiplication, VectorAddition, VectorSpace, VectorSpaceAlgebra,
};
use crate::error::SplineError;

/// Number of values written when subdividing `count` control points.
///
/// `2 * count - 1`, or `0` when there are no control points.
#[inline]
pub const fn subdivided_len(count: usize) -> usize {
    if count == 0 {
        0
    } else {
        2 * count - 1
    }
}

/// Subdivides a Bernstein-form polynomial at `t` using native `+` and left
/// scalar `*`.
///
/// See [`subdivide_in`] for the buffer contract.
///
/// # Example
///
/// ```
/// use casteljau::subdivide;
///
/// let input = [0.0, 2.0, 4.0, 6.0, 8.0];
/// let mut output = [0.0; 9];
///
/// assert_eq!(subdivide(&input, &mut output, 0.5), 9);
/// assert_eq!(output, [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
/// ```
#[inline]
pub fn subdivide<V, S>(input: &[V], output: &mut [V], t: S) -> usize
where
    V: Clone + Add<Output = V>,
    S: Field + Mul<V, Output = V>,
{
    subdivide_in(input, output, t, &NativeAlgebra::<S>::native())
}

/// Subdivides a Bernstein-form polynomial at `t` with explicit operations.
#[inline]
pub fn subdivide_with<V, S, M, A>(input: &[V], output: &mut [V], t: S, mul: M, add: A) -> usize
where
    V: Clone,
    S: Field,
    M: ScalarMultiplication<S, V>,
    A: VectorAddition<V>,
{
    subdivide_in(
        input,
        output,
        t,
        &VectorSpaceAlgebra::<S, A, M>::new(add, mul),
    )
}

/// Subdivides a Bernstein-form polynomial at `t` within a vector space algebra.
///
/// Reads the `n + 1` control values in `input` and writes the `2n + 1`
/// control values of both halves to the front of `output`, returning the
/// number of values written. Nothing past that count is touched. An empty
/// input writes nothing.
///
/// `t` is not range checked; values outside `[0, 1]` extrapolate.
///
/// # Panics
///
/// Panics if `output` holds fewer than `2n + 1` values. Use
/// [`try_subdivide_in`] to check the size first.
pub fn subdivide_in<V, A>(input: &[V], output: &mut [V], t: A::Scalar, algebra: &A) -> usize
where
    V: Clone,
    A: VectorSpace<V>,
{
    match input {
        [] => 0,
        [only] => {
            output[0] = only.clone();
            1
        }
        [first, last] => {
            output[0] = first.clone();
            output[1] = algebra.lerp(first.clone(), last.clone(), t);
            output[2] = last.clone();
            3
        }
        _ => split_polygon(input, output, t, algebra),
    }
}

/// Subdivides the control values in `range` of `input`.
///
/// An empty or reversed range (`start >= end`) writes nothing and returns 0.
///
/// # Panics
///
/// Panics if `range.end` exceeds the input length or `output` is too small.
pub fn subdivide_range<V, A>(
    input: &[V],
    range: Range<usize>,
    output: &mut [V],
    t: A::Scalar,
    algebra: &A,
) -> usize
where
    V: Clone,
    A: VectorSpace<V>,
{
    if range.start >= range.end {
        return 0;
    }
    subdivide_in(&input[range], output, t, algebra)
}

/// Subdivides after checking that `output` can hold the result.
///
/// Returns [`SplineError::OutputTooSmall`] without computing anything when
/// the buffer is shorter than [`subdivided_len`] of the input.
pub fn try_subdivide_in<V, A>(
    input: &[V],
    output: &mut [V],
    t: A::Scalar,
    algebra: &A,
) -> Result<usize, SplineError>
where
    V: Clone,
    A: VectorSpace<V>,
{
    let required = subdivided_len(input.len());
    if output.len() < required {
        warn!(
            required,
            actual = output.len(),
            "Output buffer too small for subdivision"
        );
        return Err(SplineError::OutputTooSmall {
            required,
            actual: output.len(),
        });
    }
    Ok(subdivide_in(input, output, t, algebra))
}

/// General case, degree 2 and up.
///
/// The input is copied into `[0, n]`, where it already is the left curve's
/// first column of the reduction triangle. Each round reduces the live
/// window `[front, n]` by one level in place; the entry at `n` is then the
/// trailing value of that level, which is the right curve's control point
/// and is copied down into `back`. The two cursors meet at `n`.
fn split_polygon<V, A>(input: &[V], output: &mut [V], t: A::Scalar, algebra: &A) -> usize
where
    V: Clone,
    A: VectorSpace<V>,
{
    let n = input.len() - 1;
    let written = subdivided_len(input.len());
    let output = &mut output[..written];

    output[..=n].clone_from_slice(input);
    output[2 * n] = input[n].clone();

    let mut front = 0;
    let mut back = 2 * n;
    while front < n {
        // Right to left, so each pair still holds the previous level.
        for k in (front + 1..=n).rev() {
            let a = output[k - 1].clone();
            let b = output[k].clone();
            output[k] = algebra.lerp(a, b, t);
        }
        front += 1;
        back -= 1;
        if back > n {
            output[back] = output[n].clone();
        }
    }

    written
}
