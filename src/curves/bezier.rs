//! Owned Bézier curves of arbitrary degree.
//!
//! A thin layer over the engines in [`crate::casteljau`] that owns its
//! control polygon and allocates the scratch buffers the engines expect.

use std::ops::{Add, Mul};

use num_traits::{One, Zero};
use tracing::debug;

use crate::algebra::{Field, NativeAlgebra, VectorSpace};
use crate::casteljau::{evaluate_in, subdivide_in, subdivided_len};
use crate::error::SplineError;

/// A Bézier curve over any vector type, with at least one control point.
///
/// The degree is the number of control points minus one.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierCurve<V> {
    points: Vec<V>,
}

impl<V> BezierCurve<V> {
    /// Creates a curve from its control polygon.
    ///
    /// Returns [`SplineError::EmptyControlPolygon`] if `points` is empty.
    pub fn new(points: Vec<V>) -> Result<Self, SplineError> {
        if points.is_empty() {
            debug!("Rejected empty control polygon");
            return Err(SplineError::EmptyControlPolygon);
        }
        Ok(Self { points })
    }

    /// Returns the polynomial degree.
    #[inline]
    pub fn degree(&self) -> usize {
        self.points.len() - 1
    }

    /// Returns the control points.
    #[inline]
    pub fn control_points(&self) -> &[V] {
        &self.points
    }

    /// Consumes the curve, returning its control points.
    #[inline]
    pub fn into_control_points(self) -> Vec<V> {
        self.points
    }

    /// Returns the first control point, where the curve starts.
    #[inline]
    pub fn start(&self) -> &V {
        &self.points[0]
    }

    /// Returns the last control point, where the curve ends.
    #[inline]
    pub fn end(&self) -> &V {
        &self.points[self.points.len() - 1]
    }
}

impl<V: Clone> BezierCurve<V> {
    /// Returns the same curve traversed in the opposite direction.
    ///
    /// `c.reversed().eval(t)` equals `c.eval(1 - t)`.
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    /// Evaluates the curve at `t` using native `+` and left scalar `*`.
    #[inline]
    pub fn eval<S>(&self, t: S) -> V
    where
        V: Add<Output = V>,
        S: Field + Mul<V, Output = V>,
    {
        self.eval_in(t, &NativeAlgebra::<S>::native())
    }

    /// Evaluates the curve at `t` within `algebra`.
    pub fn eval_in<A: VectorSpace<V>>(&self, t: A::Scalar, algebra: &A) -> V {
        let mut scratch = self.points.clone();
        match evaluate_in(&mut scratch, t, algebra) {
            Some(value) => value.clone(),
            None => unreachable!("control polygon should never be empty"),
        }
    }

    /// Splits the curve at `t` using native `+` and left scalar `*`.
    #[inline]
    pub fn split<S>(&self, t: S) -> (Self, Self)
    where
        V: Add<Output = V>,
        S: Field + Mul<V, Output = V>,
    {
        self.split_in(t, &NativeAlgebra::<S>::native())
    }

    /// Splits the curve at `t` within `algebra`.
    ///
    /// Both halves keep the original degree and share the point at `t`.
    pub fn split_in<A: VectorSpace<V>>(&self, t: A::Scalar, algebra: &A) -> (Self, Self) {
        let n = self.degree();

        let mut left = Vec::with_capacity(subdivided_len(self.points.len()));
        left.extend_from_slice(&self.points);
        left.extend_from_slice(&self.points[1..]);
        subdivide_in(&self.points, &mut left, t, algebra);

        let right = left.split_off(n);
        left.push(right[0].clone());
        debug!(degree = n, "Split Bezier curve");

        (Self { points: left }, Self { points: right })
    }

    /// Returns the derivative curve (hodograph), of one degree less.
    ///
    /// Control points are `n * (p[i + 1] - p[i])`, formed with the algebra's
    /// addition and multiplication by `-1`. A constant curve has a single
    /// zero control point.
    pub fn derivative_in<A>(&self, algebra: &A) -> Self
    where
        A: VectorSpace<V>,
        A::Scalar: Zero,
    {
        let n = self.degree();
        if n == 0 {
            let zero = algebra.mul(A::Scalar::zero(), self.points[0].clone());
            return Self { points: vec![zero] };
        }

        let degree = count_to::<A::Scalar>(n);
        let minus_one = -A::Scalar::one();
        let points = self
            .points
            .windows(2)
            .map(|pair| {
                let difference = algebra.add(
                    pair[1].clone(),
                    algebra.mul(minus_one, pair[0].clone()),
                );
                algebra.mul(degree, difference)
            })
            .collect();

        Self { points }
    }

    /// Evaluates the curve at `count` evenly spaced parameters from 0 to 1.
    ///
    /// A single sample is taken at `t = 0`.
    pub fn sample_in<A>(&self, count: usize, algebra: &A) -> Vec<V>
    where
        A: VectorSpace<V>,
        A::Scalar: Zero,
    {
        match count {
            0 => Vec::new(),
            1 => vec![self.start().clone()],
            _ => {
                let intervals = count_to::<A::Scalar>(count - 1);
                let mut numerator = A::Scalar::zero();
                let mut samples = Vec::with_capacity(count);
                for _ in 0..count {
                    samples.push(self.eval_in(numerator / intervals, algebra));
                    numerator = numerator + A::Scalar::one();
                }
                samples
            }
        }
    }
}

impl<V> TryFrom<Vec<V>> for BezierCurve<V> {
    type Error = SplineError;

    fn try_from(points: Vec<V>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

/// `n` as a scalar, by repeated addition of one.
fn count_to<S: Field + Zero>(n: usize) -> S {
    (0..n).fold(S::zero(), |acc, _| acc + S::one())
}
