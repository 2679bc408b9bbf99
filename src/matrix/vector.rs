use core::fmt;
use core::ops::{Add, Index, IndexMut, Mul, Sub};

use num_traits::AsPrimitive;

use crate::error::{Axis, MatrixError};
use crate::promote::{AccumulatorOf, Additive, Multiplicative, ProductOf, Promote, SumOf};
use crate::traits::Number;
use crate::Matrix;

/// A column vector of `N` elements.
///
/// Shape-equivalent to `Matrix<T, N, 1>`, and converts to and from it with
/// [`From`]. Single-index access replaces `(row, 0)` pairs.
///
/// # Examples
///
/// ```
/// use linmat::{Matrix, Vector};
///
/// let v = Vector::from_array([1_i32, 2]);
/// assert_eq!(v[1], 2);
///
/// let a = Matrix::new([[1_i32, 1], [0, 2]]);
/// let w = a * v;
/// assert_eq!(w, Vector::from_array([3, 4]));
///
/// let col: Matrix<i32, 2, 1> = w.into();
/// assert_eq!(col.to_string(), "3\n4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector<T, const N: usize>(Matrix<T, N, 1>);

impl<T, const N: usize> Vector<T, N> {
    /// Create a vector from a 1D array.
    #[inline]
    pub fn from_array(data: [T; N]) -> Self {
        Self(Matrix::new(data.map(|x| [x])))
    }

    /// Number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Bounds-checked element access.
    #[inline]
    pub fn at(&self, i: usize) -> Result<&T, MatrixError> {
        MatrixError::check(Axis::Element, i, N)?;
        self.0.at(i, 0)
    }

    /// Bounds-checked mutable element access.
    #[inline]
    pub fn at_mut(&mut self, i: usize) -> Result<&mut T, MatrixError> {
        MatrixError::check(Axis::Element, i, N)?;
        self.0.at_mut(i, 0)
    }

    /// The elements as a contiguous slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.0.as_slice()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.0.as_mut_slice()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.0.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.0.iter_mut()
    }

    /// Borrow as the equivalent one-column matrix.
    #[inline]
    pub fn as_matrix(&self) -> &Matrix<T, N, 1> {
        &self.0
    }

    /// Convert into the equivalent one-column matrix.
    #[inline]
    pub fn into_matrix(self) -> Matrix<T, N, 1> {
        self.0
    }
}

impl<T: Number, const N: usize> Vector<T, N> {
    /// All-zero vector.
    #[inline]
    pub fn zeros() -> Self {
        Self(Matrix::zeros())
    }

    /// Dot product, accumulated in the promoted type.
    ///
    /// ```
    /// use linmat::Vector;
    /// let a = Vector::from_array([1_i32, 2, 3]);
    /// let b = Vector::from_array([0.5_f64, 0.5, 0.5]);
    /// assert_eq!(a.dot(&b), 3.0);
    /// ```
    pub fn dot<U>(&self, rhs: &Vector<U, N>) -> AccumulatorOf<T, U>
    where
        T: Promote<U, Multiplicative>,
        U: Number,
        ProductOf<T, U>: Promote<ProductOf<T, U>, Additive>,
    {
        self.0.col_view(0).dot(&rhs.0.col_view(0))
    }

    /// Elementwise conversion with `as` semantics.
    #[inline]
    pub fn cast<U>(&self) -> Vector<U, N>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        Vector(self.0.cast())
    }
}

impl<T: Number, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self(Matrix::default())
    }
}

impl<T, const N: usize> From<Matrix<T, N, 1>> for Vector<T, N> {
    #[inline]
    fn from(m: Matrix<T, N, 1>) -> Self {
        Self(m)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for Matrix<T, N, 1> {
    #[inline]
    fn from(v: Vector<T, N>) -> Self {
        v.0
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        match self.at(i) {
            Ok(x) => x,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        match self.at_mut(i) {
            Ok(x) => x,
            Err(e) => panic!("{e}"),
        }
    }
}

// ── Arithmetic, delegated to the column matrix ──────────────────────

impl<T, U, const N: usize> Add<Vector<U, N>> for Vector<T, N>
where
    T: Promote<U, Additive>,
    U: Number,
{
    type Output = Vector<SumOf<T, U>, N>;

    fn add(self, rhs: Vector<U, N>) -> Self::Output {
        Vector(self.0 + rhs.0)
    }
}

impl<T, U, const N: usize> Sub<Vector<U, N>> for Vector<T, N>
where
    T: Promote<U, Additive>,
    U: Number,
{
    type Output = Vector<SumOf<T, U>, N>;

    fn sub(self, rhs: Vector<U, N>) -> Self::Output {
        Vector(self.0 - rhs.0)
    }
}

impl<T, S, const N: usize> Mul<S> for Vector<T, N>
where
    T: Promote<S, Multiplicative>,
    S: Number,
{
    type Output = Vector<ProductOf<T, S>, N>;

    fn mul(self, rhs: S) -> Self::Output {
        Vector(self.0 * rhs)
    }
}

// ── Matrix-vector product ────────────────────────────────────────────

/// `(M×N) * vec(N) → vec(M)`, through the one-column matrix product.
impl<T, U, const M: usize, const N: usize> Mul<Vector<U, N>> for Matrix<T, M, N>
where
    T: Promote<U, Multiplicative>,
    U: Number,
    ProductOf<T, U>: Promote<ProductOf<T, U>, Additive>,
{
    type Output = Vector<AccumulatorOf<T, U>, M>;

    fn mul(self, rhs: Vector<U, N>) -> Self::Output {
        Vector::from(self * Matrix::from(rhs))
    }
}

impl<T, U, const M: usize, const N: usize> Mul<&Vector<U, N>> for &Matrix<T, M, N>
where
    T: Promote<U, Multiplicative>,
    U: Number,
    ProductOf<T, U>: Promote<ProductOf<T, U>, Additive>,
{
    type Output = Vector<AccumulatorOf<T, U>, M>;

    fn mul(self, rhs: &Vector<U, N>) -> Self::Output {
        *self * *rhs
    }
}

// ── scalar * vector ─────────────────────────────────────────────────

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl<T, const N: usize> Mul<Vector<T, N>> for $t
            where
                T: Promote<$t, Multiplicative>,
            {
                type Output = Vector<ProductOf<T, $t>, N>;

                fn mul(self, rhs: Vector<T, N>) -> Self::Output {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

#[cfg(feature = "complex")]
impl_scalar_mul!(num_complex::Complex<f32>, num_complex::Complex<f64>);

/// Same dump as the column matrix: one element per line.
impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
