//! 2D vector type for control points.

use num_traits::Zero;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A 2D vector, usable directly as a control point with the default
/// operations.
///
/// Each operator needs only the matching operator on `F`. Scalar
/// multiplication works from either side for `f32` and `f64`, so `f64 * v`
/// satisfies the left multiplication the engines default to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F> Vec2<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }
}

impl<F: Zero> Vec2<F> {
    /// Creates a zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }
}

impl<F: Add<Output = F>> Add for Vec2<F> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<F: Sub<Output = F>> Sub for Vec2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<F: Copy + Mul<Output = F>> Mul<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

macro_rules! impl_left_mul {
    ($($scalar:ty),*) => {
        $(
            impl Mul<Vec2<$scalar>> for $scalar {
                type Output = Vec2<$scalar>;

                #[inline]
                fn mul(self, v: Vec2<$scalar>) -> Vec2<$scalar> {
                    v * self
                }
            }
        )*
    };
}

impl_left_mul!(f32, f64);

impl<F: Copy + Div<Output = F>> Div<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn div(self, scalar: F) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

impl<F: Neg<Output = F>> Neg for Vec2<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<F: Zero> Default for Vec2<F> {
    fn default() -> Self {
        Self::zero()
    }
}
