//! Vector space algebras and the capability check.

use std::fmt;
use std::marker::PhantomData;

use num_traits::One;

use super::field::Field;
use super::ops::{Plus, Scale, ScalarMultiplication, VectorAddition};

/// Vector addition and scalar multiplication bound to a scalar type `S`.
///
/// The vector type is not part of the algebra, so one algebra can serve
/// several vector types. Whether it actually forms a vector space over a
/// given `V` is decided by [`VectorSpace`].
///
/// # Example
///
/// ```
/// use casteljau::algebra::{VectorSpace, VectorSpaceAlgebra};
///
/// let algebra = VectorSpaceAlgebra::<f64, _, _>::new(
///     |v: [f64; 2], u: [f64; 2]| [v[0] + u[0], v[1] + u[1]],
///     |a: f64, v: [f64; 2]| [a * v[0], a * v[1]],
/// );
///
/// assert_eq!(algebra.lerp([0.0, 0.0], [2.0, 4.0], 0.5), [1.0, 2.0]);
/// ```
pub struct VectorSpaceAlgebra<S, A, M> {
    add: A,
    mul: M,
    scalar: PhantomData<fn() -> S>,
}

/// The algebra made of the vector type's native `+` and left scalar `*`.
pub type NativeAlgebra<S> = VectorSpaceAlgebra<S, Plus, Scale>;

impl<S, A, M> VectorSpaceAlgebra<S, A, M> {
    /// Creates an algebra from an addition and a multiplication.
    #[inline]
    pub fn new(add: A, mul: M) -> Self {
        Self {
            add,
            mul,
            scalar: PhantomData,
        }
    }

    /// Creates an algebra, taking a scalar value only to fix `S`.
    #[inline]
    pub fn with_scalar(_scalar: S, add: A, mul: M) -> Self {
        Self::new(add, mul)
    }

    /// Returns the addition operation.
    #[inline]
    pub fn addition(&self) -> &A {
        &self.add
    }

    /// Returns the multiplication operation.
    #[inline]
    pub fn multiplication(&self) -> &M {
        &self.mul
    }
}

impl<S> NativeAlgebra<S> {
    /// Creates the algebra of native `+` and left scalar `*`.
    #[inline]
    pub fn native() -> Self {
        Self::new(Plus, Scale)
    }
}

impl<S, A: Clone, M: Clone> Clone for VectorSpaceAlgebra<S, A, M> {
    fn clone(&self) -> Self {
        Self::new(self.add.clone(), self.mul.clone())
    }
}

impl<S, A: Copy, M: Copy> Copy for VectorSpaceAlgebra<S, A, M> {}

impl<S, A: Default, M: Default> Default for VectorSpaceAlgebra<S, A, M> {
    fn default() -> Self {
        Self::new(A::default(), M::default())
    }
}

impl<S, A, M> fmt::Debug for VectorSpaceAlgebra<S, A, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VectorSpaceAlgebra")
            .field("scalar", &std::any::type_name::<S>())
            .field("add", &std::any::type_name::<A>())
            .field("mul", &std::any::type_name::<M>())
            .finish()
    }
}

/// An algebra whose operations form a vector space over `V`.
///
/// This is the capability check used by every entry point: an operation set
/// that is not `V × V -> V` for addition and `Scalar × V -> V` for
/// multiplication does not implement it, so the call does not compile.
///
/// ```
/// use casteljau::algebra::{NativeAlgebra, VectorSpace};
///
/// fn require<V, A: VectorSpace<V>>(_: &A) {}
///
/// // A scalar is a one-dimensional vector space over itself.
/// require::<f64, _>(&NativeAlgebra::<f64>::native());
/// ```
///
/// A valid addition is not enough. Scalar-times-scalar multiplication does
/// not make `[f64; 2]` a vector space:
///
/// ```compile_fail
/// use casteljau::algebra::{VectorSpace, VectorSpaceAlgebra};
///
/// fn require<V, A: VectorSpace<V>>(_: &A) {}
///
/// let algebra = VectorSpaceAlgebra::<f64, _, _>::new(
///     |v: [f64; 2], u: [f64; 2]| [v[0] + u[0], v[1] + u[1]],
///     |a: f64, b: f64| a * b,
/// );
/// require::<[f64; 2], _>(&algebra);
/// ```
///
/// The native operations reject arrays outright, since `[f64; 2]` has no `+`:
///
/// ```compile_fail
/// use casteljau::algebra::{NativeAlgebra, VectorSpace};
///
/// fn require<V, A: VectorSpace<V>>(_: &A) {}
///
/// require::<[f64; 2], _>(&NativeAlgebra::<f64>::native());
/// ```
///
/// Nor can a vector type stand in for the scalar:
///
/// ```compile_fail
/// use casteljau::algebra::{VectorSpace, VectorSpaceAlgebra};
///
/// fn require<V, A: VectorSpace<V>>(_: &A) {}
///
/// let algebra = VectorSpaceAlgebra::<[f64; 2], _, _>::new(
///     |v: [f64; 2], u: [f64; 2]| [v[0] + u[0], v[1] + u[1]],
///     |a: [f64; 2], v: [f64; 2]| [a[0] * v[0], a[1] * v[1]],
/// );
/// require::<[f64; 2], _>(&algebra);
/// ```
pub trait VectorSpace<V> {
    /// The scalar field.
    type Scalar: Field;

    /// Adds two vectors.
    fn add(&self, v: V, u: V) -> V;

    /// Multiplies a vector by a scalar from the left.
    fn mul(&self, a: Self::Scalar, v: V) -> V;

    /// Linear interpolation, `(1 - t) * a + t * b`.
    ///
    /// Defined for any `t`; outside `[0, 1]` it extrapolates.
    #[inline]
    fn lerp(&self, a: V, b: V, t: Self::Scalar) -> V {
        let s = Self::Scalar::one() - t;
        self.add(self.mul(s, a), self.mul(t, b))
    }
}

impl<V, S, A, M> VectorSpace<V> for VectorSpaceAlgebra<S, A, M>
where
    S: Field,
    A: VectorAddition<V>,
    M: ScalarMultiplication<S, V>,
{
    type Scalar = S;

    #[inline]
    fn add(&self, v: V, u: V) -> V {
        self.add.add(v, u)
    }

    #[inline]
    fn mul(&self, a: S, v: V) -> V {
        self.mul.mul(a, v)
    }
}

impl<V, T> VectorSpace<V> for &T
where
    T: VectorSpace<V> + ?Sized,
{
    type Scalar = T::Scalar;

    #[inline]
    fn add(&self, v: V, u: V) -> V {
        (**self).add(v, u)
    }

    #[inline]
    fn mul(&self, a: Self::Scalar, v: V) -> V {
        (**self).mul(a, v)
    }
}
