//! A vector bundled with its algebra, for operator syntax.

use std::ops::{Add, Mul};

use super::space::{VectorSpace, VectorSpaceAlgebra};

/// A value paired with the algebra that defines its arithmetic.
///
/// `+` and `*` delegate to the bound algebra, so a type with no operator
/// overloads of its own can be used wherever native `+` and scalar `*` are
/// expected, including the default operations of the engines.
///
/// ```
/// use casteljau::algebra::{AlgebraicVector, VectorSpaceAlgebra};
///
/// let algebra = VectorSpaceAlgebra::<f64, _, _>::new(
///     |v: [f64; 2], u: [f64; 2]| [v[0] + u[0], v[1] + u[1]],
///     |a: f64, v: [f64; 2]| [a * v[0], a * v[1]],
/// );
///
/// let v = AlgebraicVector::new([1.0, 2.0], algebra);
/// let u = AlgebraicVector::new([3.0, 4.0], algebra);
/// assert_eq!((v + u * 2.0).value, [7.0, 10.0]);
/// assert_eq!((0.5 * v).value, [0.5, 1.0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AlgebraicVector<V, A> {
    /// The wrapped vector.
    pub value: V,
    algebra: A,
}

impl<V, A> AlgebraicVector<V, A> {
    /// Binds a value to an algebra.
    #[inline]
    pub fn new(value: V, algebra: A) -> Self {
        Self { value, algebra }
    }

    /// Returns the bound algebra.
    #[inline]
    pub fn algebra(&self) -> &A {
        &self.algebra
    }

    /// Unwraps the value.
    #[inline]
    pub fn into_inner(self) -> V {
        self.value
    }
}

impl<V, A> AlgebraicVector<V, A>
where
    A: VectorSpace<V>,
{
    /// Multiplies by a scalar from the left.
    #[inline]
    pub fn scale(self, a: A::Scalar) -> Self {
        let value = self.algebra.mul(a, self.value);
        Self::new(value, self.algebra)
    }
}

impl<V, A> PartialEq for AlgebraicVector<V, A>
where
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<V, A> Add for AlgebraicVector<V, A>
where
    A: VectorSpace<V>,
{
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        let value = self.algebra.add(self.value, other.value);
        Self::new(value, self.algebra)
    }
}

impl<V, S, Ad, M> Mul<S> for AlgebraicVector<V, VectorSpaceAlgebra<S, Ad, M>>
where
    VectorSpaceAlgebra<S, Ad, M>: VectorSpace<V, Scalar = S>,
{
    type Output = Self;

    #[inline]
    fn mul(self, a: S) -> Self {
        self.scale(a)
    }
}

macro_rules! impl_left_scalar_mul {
    ($($scalar:ty),*) => {
        $(
            impl<V, Ad, M> Mul<AlgebraicVector<V, VectorSpaceAlgebra<$scalar, Ad, M>>> for $scalar
            where
                VectorSpaceAlgebra<$scalar, Ad, M>: VectorSpace<V, Scalar = $scalar>,
            {
                type Output = AlgebraicVector<V, VectorSpaceAlgebra<$scalar, Ad, M>>;

                #[inline]
                fn mul(self, v: Self::Output) -> Self::Output {
                    v.scale(self)
                }
            }
        )*
    };
}

impl_left_scalar_mul!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::casteljau::{evaluate, subdivide};

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Pair {
        x: f64,
        y: f64,
    }

    fn pair(x: f64, y: f64) -> Pair {
        Pair { x, y }
    }

    fn pair_algebra() -> VectorSpaceAlgebra<
        f64,
        impl Fn(Pair, Pair) -> Pair + Copy,
        impl Fn(f64, Pair) -> Pair + Copy,
    > {
        VectorSpaceAlgebra::new(
            |v: Pair, u: Pair| pair(v.x + u.x, v.y + u.y),
            |a: f64, v: Pair| pair(a * v.x, a * v.y),
        )
    }

    #[test]
    fn test_addition_commutes() {
        let algebra = pair_algebra();
        let v = AlgebraicVector::new(pair(1.0, 2.0), algebra);
        let u = AlgebraicVector::new(pair(2.0, 1.0), algebra);

        assert_eq!((v + u).value, (u + v).value);
        assert_eq!((v + u).value, algebra.add(v.value, u.value));
    }

    #[test]
    fn test_left_and_right_scalar_multiplication() {
        let algebra = pair_algebra();
        let v = AlgebraicVector::new(pair(1.0, 2.0), algebra);

        assert_eq!((3.0 * v).value, (v * 3.0).value);
        assert_eq!((3.0 * v).value, algebra.mul(3.0, v.value));
        assert_eq!(v.scale(3.0).into_inner(), pair(3.0, 6.0));
    }

    #[test]
    fn test_engines_accept_wrapped_values() {
        let algebra = pair_algebra();
        let wrap = |x: f64, y: f64| AlgebraicVector::new(pair(x, y), algebra);

        let mut coefficients = [wrap(0.0, 0.0), wrap(1.0, 1.0), wrap(2.0, 0.0), wrap(3.0, -1.0)];
        let value = evaluate(&mut coefficients, 0.5_f64).copied();
        assert_eq!(value.map(|v| v.value), Some(pair(1.5, 0.25)));

        let input = [wrap(0.0, 0.0), wrap(2.0, 4.0)];
        let mut output = [wrap(0.0, 0.0); 3];
        assert_eq!(subdivide(&input, &mut output, 0.5_f64), 3);
        assert_eq!(output[1].value, pair(1.0, 2.0));
    }
}
