//! Four-lane scalar type.

use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};
use wide::f32x4;

/// Four `f32` lanes with lane-wise arithmetic, usable as a [`Field`].
///
/// [`Field`]: crate::algebra::Field
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct F32x4(pub f32x4);

impl F32x4 {
    /// Creates lanes from an array.
    #[inline]
    pub fn new(lanes: [f32; 4]) -> Self {
        Self(f32x4::new(lanes))
    }

    /// Creates lanes that all hold `value`.
    #[inline]
    pub fn splat(value: f32) -> Self {
        Self(f32x4::splat(value))
    }

    /// Extracts the lanes as an array.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        self.0.to_array()
    }
}

impl Add for F32x4 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for F32x4 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Mul for F32x4 {
    type Output = Self;

    #[inline]
    fn mul(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl Div for F32x4 {
    type Output = Self;

    #[inline]
    fn div(self, other: Self) -> Self {
        Self(self.0 / other.0)
    }
}

impl Neg for F32x4 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Zero for F32x4 {
    #[inline]
    fn zero() -> Self {
        Self::splat(0.0)
    }

    fn is_zero(&self) -> bool {
        self.to_array().iter().all(|&lane| lane == 0.0)
    }
}

impl One for F32x4 {
    #[inline]
    fn one() -> Self {
        Self::splat(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::Field;

    fn require_field<S: Field>() {}

    #[test]
    fn test_is_field() {
        require_field::<F32x4>();
    }

    #[test]
    fn test_lane_wise_arithmetic() {
        let a = F32x4::new([1.0, 2.0, 3.0, 4.0]);
        let b = F32x4::splat(2.0);
        assert_eq!((a + b).to_array(), [3.0, 4.0, 5.0, 6.0]);
        assert_eq!((a - b).to_array(), [-1.0, 0.0, 1.0, 2.0]);
        assert_eq!((a * b).to_array(), [2.0, 4.0, 6.0, 8.0]);
        assert_eq!((a / b).to_array(), [0.5, 1.0, 1.5, 2.0]);
        assert_eq!((-a).to_array(), [-1.0, -2.0, -3.0, -4.0]);
    }

    #[test]
    fn test_identities() {
        assert!(F32x4::zero().is_zero());
        assert!(!F32x4::new([0.0, 0.0, 1.0, 0.0]).is_zero());
        assert_eq!(F32x4::one().to_array(), [1.0; 4]);
    }
}
