//! Borrowed, strided views into matrix storage.
//!
//! A view holds a slice of its parent's buffer, so the borrow checker keeps
//! the parent alive and unmodified for as long as the view exists. Logical
//! element `i` of a `View<T, S, D>` lives at `buf[i * D]`.
//!
//! The stride `D` must be positive for any non-empty view. A column view of
//! an `R×0` matrix would have stride `0`, but `col` rejects every index on
//! such a shape before a view is built, so generic code over empty shapes
//! still compiles.
//!
//! ```compile_fail
//! use linmat::Matrix;
//! let row = {
//!     let m: Matrix<i32, 2, 2> = Matrix::eye();
//!     m.row(0).unwrap()
//! }; // `m` dropped while borrowed
//! assert_eq!(row[0], 1);
//! ```

use core::ops::{Deref, DerefMut, Index, IndexMut};

use num_traits::{AsPrimitive, Zero};

use super::Matrix;
use crate::error::{Axis, MatrixError};
use crate::promote::{self, AccumulatorOf, Additive, Multiplicative, ProductOf, Promote};
use crate::traits::Number;

#[inline]
fn check_extent<T, const S: usize, const D: usize>(buf: &[T]) {
    assert!(S == 0 || D > 0, "view stride must be positive");
    assert!(
        S == 0 || buf.len() > (S - 1) * D,
        "buffer of {} elements too short for a view of {} elements with stride {}",
        buf.len(),
        S,
        D
    );
}

/// Read-only view of `S` elements spaced `D` apart.
///
/// A row view is `View<T, C, 1>`, a column view `View<T, R, C>`.
///
/// ```
/// use linmat::Matrix;
/// let m = Matrix::new([[1, 2, 3], [4, 5, 6]]);
///
/// let row = m.row(1).unwrap();
/// assert_eq!(row.len(), 3);
/// assert_eq!(row[2], 6);
///
/// let col = m.col(1).unwrap();
/// assert_eq!(col.stride(), 3);
/// assert_eq!(col.to_array(), [2, 5]);
/// assert!(col.get(2).is_err());
/// ```
#[derive(Debug)]
pub struct View<'a, T, const S: usize, const D: usize> {
    buf: &'a [T],
}

impl<T, const S: usize, const D: usize> Clone for View<'_, T, S, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const S: usize, const D: usize> Copy for View<'_, T, S, D> {}

impl<'a, T, const S: usize, const D: usize> View<'a, T, S, D> {
    /// Panics if `buf` cannot hold `S` elements at stride `D`.
    pub(crate) fn new(buf: &'a [T]) -> Self {
        check_extent::<T, S, D>(buf);
        Self { buf }
    }

    /// Number of logical elements.
    #[inline]
    pub const fn len(&self) -> usize {
        S
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        S == 0
    }

    /// Distance in the parent buffer between consecutive elements.
    #[inline]
    pub const fn stride(&self) -> usize {
        D
    }

    /// Element `i`, or `OutOfRange` when `i >= S`.
    #[inline]
    pub fn get(&self, i: usize) -> Result<&'a T, MatrixError> {
        MatrixError::check(Axis::Element, i, S)?;
        Ok(&self.buf[i * D])
    }

    /// Iterate over the `S` elements in order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &'a T> {
        let buf = self.buf;
        (0..S).map(move |i| &buf[i * D])
    }

    /// Copy the viewed elements out.
    pub fn to_array(&self) -> [T; S]
    where
        T: Copy,
    {
        core::array::from_fn(|i| self.buf[i * D])
    }
}

impl<T: Number, const S: usize, const D: usize> View<'_, T, S, D> {
    /// Dot product with another view of the same length, accumulated in the
    /// promoted type. The two strides are independent, so a row can be dotted
    /// with a column.
    ///
    /// ```
    /// use linmat::Matrix;
    /// let a = Matrix::new([[1_i32, 2], [3, 4]]);
    /// let b = Matrix::new([[0.5_f64, 1.0], [2.0, 0.25]]);
    /// // row 1 of `a` (stride 1) against column 0 of `b` (stride 2)
    /// assert_eq!(a.row(1).unwrap().dot(&b.col(0).unwrap()), 9.5);
    /// ```
    pub fn dot<U, const E: usize>(&self, rhs: &View<'_, U, S, E>) -> AccumulatorOf<T, U>
    where
        T: Promote<U, Multiplicative>,
        U: Number,
        ProductOf<T, U>: Promote<ProductOf<T, U>, Additive>,
    {
        let mut sum: AccumulatorOf<T, U> = Zero::zero();
        for (&a, &b) in self.iter().zip(rhs.iter()) {
            let p = promote::mul(a, b);
            sum = sum + <ProductOf<T, U> as Promote<ProductOf<T, U>, Additive>>::promote_lhs(p);
        }
        sum
    }
}

impl<T, const S: usize, const D: usize> Index<usize> for View<'_, T, S, D> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        match self.get(i) {
            Ok(x) => x,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Copy, const D: usize> View<'_, T, 1, D> {
    /// The single element this view wraps.
    #[inline]
    pub fn value(&self) -> T {
        self.buf[0]
    }
}

/// A single-element view stands in for its scalar.
impl<T, const D: usize> Deref for View<'_, T, 1, D> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.buf[0]
    }
}

/// Mutable view of `S` elements spaced `D` apart.
///
/// ```
/// use linmat::Matrix;
/// let mut m: Matrix<i32, 2, 2> = Matrix::zeros();
/// {
///     let mut col = m.col_mut(0).unwrap();
///     col[0] = 1;
///     col[1] = 3;
/// }
/// assert_eq!(m, Matrix::new([[1, 0], [3, 0]]));
/// ```
#[derive(Debug)]
pub struct ViewMut<'a, T, const S: usize, const D: usize> {
    buf: &'a mut [T],
}

impl<'a, T, const S: usize, const D: usize> ViewMut<'a, T, S, D> {
    /// Panics if `buf` cannot hold `S` elements at stride `D`.
    pub(crate) fn new(buf: &'a mut [T]) -> Self {
        check_extent::<T, S, D>(buf);
        Self { buf }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        S
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        S == 0
    }

    #[inline]
    pub const fn stride(&self) -> usize {
        D
    }

    #[inline]
    pub fn get(&self, i: usize) -> Result<&T, MatrixError> {
        MatrixError::check(Axis::Element, i, S)?;
        Ok(&self.buf[i * D])
    }

    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Result<&mut T, MatrixError> {
        MatrixError::check(Axis::Element, i, S)?;
        Ok(&mut self.buf[i * D])
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.as_view().iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.buf.iter_mut().step_by(D.max(1)).take(S)
    }

    /// Reborrow as a read-only view.
    #[inline]
    pub fn as_view(&self) -> View<'_, T, S, D> {
        View { buf: &*self.buf }
    }
}

impl<T, const S: usize, const D: usize> Index<usize> for ViewMut<'_, T, S, D> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        match self.get(i) {
            Ok(x) => x,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T, const S: usize, const D: usize> IndexMut<usize> for ViewMut<'_, T, S, D> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        match self.get_mut(i) {
            Ok(x) => x,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Copy + 'static, const D: usize> ViewMut<'_, T, 1, D> {
    #[inline]
    pub fn value(&self) -> T {
        self.buf[0]
    }

    /// Overwrite the single element, converting with `as` semantics.
    ///
    /// ```
    /// use linmat::Matrix;
    /// let mut m: Matrix<i32, 1, 1> = Matrix::zeros();
    /// m.row_mut(0).unwrap().set(2.9_f64);
    /// assert_eq!(m[(0, 0)], 2);
    /// ```
    #[inline]
    pub fn set<U: AsPrimitive<T>>(&mut self, value: U) -> &mut Self {
        self.buf[0] = value.as_();
        self
    }
}

impl<T, const D: usize> Deref for ViewMut<'_, T, 1, D> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.buf[0]
    }
}

impl<T, const D: usize> DerefMut for ViewMut<'_, T, 1, D> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.buf[0]
    }
}

// ── Matrix accessors ────────────────────────────────────────────────

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The whole matrix as a flat row-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_flattened()
    }

    /// The whole matrix as a mutable flat row-major slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_flattened_mut()
    }

    // Callers guarantee `r < R`.
    #[inline]
    pub(crate) fn row_view(&self, r: usize) -> View<'_, T, C, 1> {
        View::new(&self.data[r])
    }

    // Callers guarantee `c < C`. An empty matrix yields an empty view.
    #[inline]
    pub(crate) fn col_view(&self, c: usize) -> View<'_, T, R, C> {
        View::new(self.as_slice().get(c..).unwrap_or_default())
    }

    /// View of row `r` (stride 1), or `OutOfRange` when `r >= R`.
    #[inline]
    pub fn row(&self, r: usize) -> Result<View<'_, T, C, 1>, MatrixError> {
        MatrixError::check(Axis::Row, r, R)?;
        Ok(self.row_view(r))
    }

    /// Mutable view of row `r`.
    #[inline]
    pub fn row_mut(&mut self, r: usize) -> Result<ViewMut<'_, T, C, 1>, MatrixError> {
        MatrixError::check(Axis::Row, r, R)?;
        Ok(ViewMut::new(&mut self.data[r]))
    }

    /// View of column `c` (stride `C`), or `OutOfRange` when `c >= C`.
    #[inline]
    pub fn col(&self, c: usize) -> Result<View<'_, T, R, C>, MatrixError> {
        MatrixError::check(Axis::Column, c, C)?;
        Ok(self.col_view(c))
    }

    /// Mutable view of column `c`.
    #[inline]
    pub fn col_mut(&mut self, c: usize) -> Result<ViewMut<'_, T, R, C>, MatrixError> {
        MatrixError::check(Axis::Column, c, C)?;
        Ok(ViewMut::new(self.as_mut_slice().get_mut(c..).unwrap_or_default()))
    }

    /// Iterate over row views, top to bottom.
    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = View<'_, T, C, 1>> {
        (0..R).map(move |r| self.row_view(r))
    }

    /// Iterate over all elements in row-major order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterate mutably over all elements in row-major order.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<'a, T, const R: usize, const C: usize> IntoIterator for &'a Matrix<T, R, C> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const R: usize, const C: usize> IntoIterator for &'a mut Matrix<T, R, C> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
