//! Scalar field capability.

use num_traits::One;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A scalar type usable as the field of a vector space.
///
/// This is a typing predicate: it checks that `+`, `-`, `*`, `/` and unary
/// `-` exist with `Self × Self -> Self` signatures and that `1` can be
/// produced, which is all interpolation needs. It does not verify the field
/// axioms, so integer types qualify.
///
/// Implemented automatically for every type meeting the bounds, which covers
/// the primitive numeric types and complex numbers.
///
/// Arrays and tuples are not fields:
///
/// ```compile_fail
/// fn require_field<T: casteljau::algebra::Field>() {}
/// require_field::<[f64; 2]>();
/// ```
pub trait Field:
    Copy
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
}

impl<T> Field for T where
    T: Copy
        + One
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + Neg<Output = T>
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;

    fn unit_interval_midpoint<S: Field>() -> S {
        S::one() / (S::one() + S::one())
    }

    #[test]
    fn test_primitive_fields() {
        assert_eq!(unit_interval_midpoint::<f64>(), 0.5);
        assert_eq!(unit_interval_midpoint::<f32>(), 0.5);
        // Integer division truncates; the predicate only checks typing.
        assert_eq!(unit_interval_midpoint::<i32>(), 0);
    }

    /// A scalar with the arithmetic operators and a unit, but no zero or
    /// equality.
    #[derive(Debug, Clone, Copy)]
    struct Ratio(f64);

    macro_rules! ratio_op {
        ($($trait:ident::$method:ident => $op:tt),*) => {
            $(
                impl std::ops::$trait for Ratio {
                    type Output = Ratio;

                    fn $method(self, other: Ratio) -> Ratio {
                        Ratio(self.0 $op other.0)
                    }
                }
            )*
        };
    }

    ratio_op!(Add::add => +, Sub::sub => -, Mul::mul => *, Div::div => /);

    impl Neg for Ratio {
        type Output = Ratio;

        fn neg(self) -> Ratio {
            Ratio(-self.0)
        }
    }

    impl std::ops::Mul<f64> for Ratio {
        type Output = f64;

        fn mul(self, v: f64) -> f64 {
            self.0 * v
        }
    }

    impl One for Ratio {
        fn one() -> Self {
            Ratio(1.0)
        }
    }

    #[test]
    fn test_field_without_zero_drives_the_engines() {
        assert_eq!(unit_interval_midpoint::<Ratio>().0, 0.5);

        let mut coefficients = [0.0, 2.0, 4.0];
        let value = crate::casteljau::evaluate(&mut coefficients, Ratio(0.25)).copied();
        assert_eq!(value, Some(1.0));

        let mut output = [0.0; 5];
        assert_eq!(crate::casteljau::subdivide(&[0.0, 2.0, 4.0], &mut output, Ratio(0.5)), 5);
        assert_eq!(output, [0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_complex_field() {
        let half = unit_interval_midpoint::<Complex<f64>>();
        assert_eq!(half, Complex::new(0.5, 0.0));
    }
}
