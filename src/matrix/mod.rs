pub mod factory;
mod ops;
mod util;
pub mod vector;
pub mod view;

use core::ops::{Index, IndexMut};

use crate::error::{Axis, MatrixError};
use crate::traits::Number;

/// Fixed-size matrix with `R` rows and `C` columns.
///
/// Storage is row-major: `data[row][col]`, which is `R * C` contiguous
/// elements with `(r, c)` at flat offset `r * C + c`. Copies are deep: no two
/// matrices ever share storage.
///
/// Shapes are part of the type, so `+`, `-` and `*` between incompatible
/// shapes do not compile. Element types may differ between operands; the
/// result type comes from [`promote`](crate::promote).
///
/// # Examples
///
/// ```
/// use linmat::Matrix;
///
/// let a = Matrix::new([[1_i32, 2], [3, 4]]);
/// assert_eq!(a[(0, 1)], 2);
/// assert_eq!(*a.at(1, 0).unwrap(), 3);
/// assert_eq!(a[1][1], 4);
/// assert!(a.at(2, 0).is_err());
///
/// let b = a * 0.5_f64;
/// assert_eq!(b[(1, 1)], 2.0);
///
/// let id: Matrix<i32, 2, 2> = Matrix::eye();
/// assert_eq!(id * a, a);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix<T, const R: usize, const C: usize> {
    data: [[T; C]; R],
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Wrap a row-major 2D array: `[[row0], [row1], ...]`.
    #[inline]
    pub const fn new(rows: [[T; C]; R]) -> Self {
        Self { data: rows }
    }

    /// Create a matrix by calling `f(row, col)` for each element, in
    /// row-major order.
    ///
    /// ```
    /// use linmat::Matrix;
    /// let m: Matrix<usize, 2, 3> = Matrix::from_fn(|r, c| r * 10 + c);
    /// assert_eq!(m[(1, 2)], 12);
    /// ```
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self {
            data: core::array::from_fn(|r| core::array::from_fn(|c| f(r, c))),
        }
    }

    /// Number of rows.
    #[inline]
    pub const fn nrows(&self) -> usize {
        R
    }

    /// Number of columns.
    #[inline]
    pub const fn ncols(&self) -> usize {
        C
    }

    /// Bounds-checked element access.
    ///
    /// Each axis is checked on its own: a row index `>= R` or a column
    /// index `>= C` is rejected, whichever comes first.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> Result<&T, MatrixError> {
        MatrixError::check(Axis::Row, row, R)?;
        MatrixError::check(Axis::Column, col, C)?;
        Ok(&self.data[row][col])
    }

    /// Bounds-checked mutable element access.
    #[inline]
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T, MatrixError> {
        MatrixError::check(Axis::Row, row, R)?;
        MatrixError::check(Axis::Column, col, C)?;
        Ok(&mut self.data[row][col])
    }

    /// Consume the matrix, returning its rows.
    #[inline]
    pub fn into_rows(self) -> [[T; C]; R] {
        self.data
    }
}

impl<T: Number, const R: usize, const C: usize> Matrix<T, R, C> {
    /// All-zero matrix. See [`factory::zero`].
    #[inline]
    pub fn zeros() -> Self {
        factory::zero()
    }

    /// Build from exactly `R * C` elements in row-major order.
    ///
    /// Consumption stops at the first element past `R * C`, so an over-long
    /// (even unbounded) iterator is rejected with `found == R * C + 1`.
    ///
    /// ```
    /// use linmat::{Matrix, MatrixError};
    /// let m: Matrix<i32, 2, 2> = Matrix::from_elements([9, 8, 7, 6]).unwrap();
    /// assert_eq!(m.to_string(), "9 8\n7 6");
    ///
    /// let short = Matrix::<i32, 2, 2>::from_elements([1, 2, 3]);
    /// assert_eq!(short, Err(MatrixError::LengthMismatch { expected: 4, found: 3 }));
    /// ```
    pub fn from_elements(elements: impl IntoIterator<Item = T>) -> Result<Self, MatrixError> {
        let mut out = Self::default();
        let mut found = 0;
        {
            let slots = out.as_mut_slice();
            for x in elements {
                match slots.get_mut(found) {
                    Some(slot) => *slot = x,
                    None => {
                        found += 1;
                        break;
                    }
                }
                found += 1;
            }
        }
        if found != R * C {
            return Err(MatrixError::LengthMismatch {
                expected: R * C,
                found,
            });
        }
        Ok(out)
    }

    /// Build from a row-major slice of exactly `R * C` elements.
    #[inline]
    pub fn from_row_major(slice: &[T]) -> Result<Self, MatrixError> {
        Self::from_elements(slice.iter().copied())
    }
}

impl<T: Number, const N: usize> Matrix<T, N, N> {
    /// Identity matrix. See [`factory::eye`].
    #[inline]
    pub fn eye() -> Self {
        factory::eye()
    }
}

/// Zero-filled, for any shape (including empty ones).
impl<T: Number, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::new([[T::zero(); C]; R])
    }
}

// Index by (row, col) tuple
impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.at(row, col) {
            Ok(x) => x,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        match self.at_mut(row, col) {
            Ok(x) => x,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Row access, so that `m[r][c]` chains.
///
/// Only the row index is checked here and reported as a [`MatrixError`].
/// The column index of `m[r][c]` goes to the returned `[T; C]`, whose own
/// bounds check panics with the core slice message. Use `m[(r, c)]` or
/// `m.row(r)?[c]` to have both axes reported the same way.
impl<T, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = [T; C];

    #[inline]
    fn index(&self, row: usize) -> &[T; C] {
        if let Err(e) = MatrixError::check(Axis::Row, row, R) {
            panic!("{e}");
        }
        &self.data[row]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, row: usize) -> &mut [T; C] {
        if let Err(e) = MatrixError::check(Axis::Row, row, R) {
            panic!("{e}");
        }
        &mut self.data[row]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_index() {
        let m = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m[(1, 0)], 3.0);
        assert_eq!(m[(1, 1)], 4.0);
        assert_eq!(m[1][0], 3.0);
    }

    #[test]
    fn index_mut() {
        let mut m: Matrix<f64, 2, 2> = Matrix::default();
        m[(0, 1)] = 5.0;
        m[1][0] = 6.0;
        assert_eq!(m[(0, 1)], 5.0);
        assert_eq!(m[(1, 0)], 6.0);
    }

    #[test]
    fn non_square() {
        let m: Matrix<f64, 2, 3> = Matrix::zeros();
        assert_eq!(m.nrows(), 2);
        assert_eq!(m.ncols(), 3);
    }

    #[test]
    fn at_checks_each_axis() {
        let mut m: Matrix<i32, 2, 3> = Matrix::zeros();
        assert_eq!(m.at(1, 2), Ok(&0));

        // row alone out of range
        assert_eq!(
            m.at(2, 0),
            Err(MatrixError::OutOfRange { axis: Axis::Row, index: 2, bound: 2 })
        );
        // column alone out of range
        assert_eq!(
            m.at(0, 3),
            Err(MatrixError::OutOfRange { axis: Axis::Column, index: 3, bound: 3 })
        );
        // both out of range reports the row first
        assert_eq!(
            m.at(5, 5),
            Err(MatrixError::OutOfRange { axis: Axis::Row, index: 5, bound: 2 })
        );

        *m.at_mut(1, 1).unwrap() = 7;
        assert_eq!(m[(1, 1)], 7);
        assert!(m.at_mut(0, 3).is_err());
    }

    #[test]
    #[should_panic(expected = "column index 2 out of range")]
    fn index_column_overflow_panics() {
        let m: Matrix<i32, 3, 2> = Matrix::zeros();
        let _x = m[(0, 2)];
    }

    #[test]
    #[should_panic(expected = "row index 3 out of range")]
    fn index_row_overflow_panics() {
        let m: Matrix<i32, 3, 2> = Matrix::zeros();
        let _x = m[3][0];
    }

    #[test]
    fn from_elements_row_major() {
        let m: Matrix<i32, 2, 3> = Matrix::from_elements([1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(m[(0, 2)], 3);
        assert_eq!(m[(1, 0)], 4);
        assert_eq!(m.into_rows(), [[1, 2, 3], [4, 5, 6]]);
    }

    #[test]
    fn from_elements_wrong_length() {
        let long = Matrix::<i32, 2, 2>::from_elements(0..6);
        assert_eq!(long, Err(MatrixError::LengthMismatch { expected: 4, found: 5 }));

        let short = Matrix::<u8, 1, 2>::from_row_major(&[1]);
        assert_eq!(short, Err(MatrixError::LengthMismatch { expected: 2, found: 1 }));
    }

    #[test]
    fn from_elements_stops_on_unbounded_input() {
        let m = Matrix::<u32, 2, 2>::from_elements(core::iter::repeat(7));
        assert_eq!(m, Err(MatrixError::LengthMismatch { expected: 4, found: 5 }));

        let mut pulled = 0;
        let counted = (0..1_000_000).inspect(|_| pulled += 1);
        assert!(Matrix::<i32, 2, 2>::from_elements(counted).is_err());
        assert_eq!(pulled, 5);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn chained_index_column_overflow_uses_array_check() {
        let m: Matrix<i32, 2, 3> = Matrix::zeros();
        let col = core::hint::black_box(3);
        let _x = m[0][col];
    }

    #[test]
    #[should_panic(expected = "element index 3 out of range")]
    fn row_view_index_reports_column_overflow() {
        let m: Matrix<i32, 2, 3> = Matrix::zeros();
        let _x = m.row(0).unwrap()[3];
    }

    #[test]
    fn default_is_zero_and_allows_empty_shapes() {
        let m: Matrix<f32, 2, 2> = Matrix::default();
        assert_eq!(m, Matrix::new([[0.0; 2]; 2]));

        let empty: Matrix<i32, 0, 3> = Matrix::default();
        assert!(empty.at(0, 0).is_err());
    }

    #[test]
    fn copy_is_independent() {
        let a = Matrix::new([[1, 2], [3, 4]]);
        let mut b = a;
        b[(0, 0)] = 100;
        assert_eq!(a[(0, 0)], 1);
        assert_eq!(b[(0, 0)], 100);
    }
}
