use core::fmt::{self, Write as _};

use num_traits::AsPrimitive;

use crate::Matrix;

// ── Conversions ─────────────────────────────────────────────────────

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use linmat::Matrix;
    /// let m = Matrix::new([[1.0_f64, 4.0], [9.0, 16.0]]);
    /// let r = m.map(|x: f64| x.sqrt());
    /// assert_eq!(r[(0, 0)], 1.0);
    /// assert_eq!(r[(1, 1)], 4.0);
    /// ```
    pub fn map<U>(&self, mut f: impl FnMut(T) -> U) -> Matrix<U, R, C>
    where
        T: Copy,
    {
        Matrix::from_fn(|r, c| f(self[(r, c)]))
    }

    /// Explicit elementwise cast to another element type, with `as`
    /// semantics (truncation toward zero for float to int).
    ///
    /// ```
    /// use linmat::Matrix;
    /// let m = Matrix::new([[1.9_f64, -0.5], [2.0, 3.5]]);
    /// let i: Matrix<i32, 2, 2> = m.cast();
    /// assert_eq!(i, Matrix::new([[1, 0], [2, 3]]));
    /// ```
    pub fn cast<U>(&self) -> Matrix<U, R, C>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        self.map(|x| AsPrimitive::<U>::as_(x))
    }

    /// Overwrite every element from a same-shape matrix of any castable
    /// element type, returning `self` for chaining.
    ///
    /// ```
    /// use linmat::Matrix;
    /// let mut m: Matrix<f32, 1, 2> = Matrix::zeros();
    /// let src = Matrix::new([[3_u8, 4]]);
    /// assert_eq!(m.assign_from(&src)[(0, 1)], 4.0);
    /// ```
    pub fn assign_from<U>(&mut self, other: &Matrix<U, R, C>) -> &mut Self
    where
        U: AsPrimitive<T>,
        T: Copy + 'static,
    {
        for (dst, &src) in self.iter_mut().zip(other.iter()) {
            *dst = src.as_();
        }
        self
    }

    /// Transpose: (R×C) → (C×R).
    pub fn transpose(&self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|r, c| self[(c, r)])
    }
}

// ── Display ─────────────────────────────────────────────────────────

/// Row-major dump: columns separated by one space, rows by `\n`, with no
/// trailing separator. Formatter options apply to every element.
impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..R {
            if r > 0 {
                f.write_char('\n')?;
            }
            for c in 0..C {
                if c > 0 {
                    f.write_char(' ')?;
                }
                fmt::Display::fmt(&self[(r, c)], f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_changes_type() {
        let m = Matrix::new([[1_i32, 2], [3, 4]]);
        let doubled: Matrix<f64, 2, 2> = m.map(|x| x as f64 * 2.0);
        assert_eq!(doubled, Matrix::new([[2.0_f64, 4.0], [6.0, 8.0]]));
    }

    #[test]
    fn cast_round_trip_preserves_integers() {
        let m = Matrix::new([[1_i32, -2, 3]]);
        let f: Matrix<f64, 1, 3> = m.cast();
        assert_eq!(f.cast::<i32>(), m);
    }

    #[test]
    fn assign_from_chains() {
        let mut m: Matrix<i64, 2, 1> = Matrix::zeros();
        let a = Matrix::new([[1.5_f32], [2.5]]);
        let b = Matrix::new([[7_u8], [9]]);
        m.assign_from(&a).assign_from(&b);
        assert_eq!(m, Matrix::new([[7], [9]]));
    }

    #[test]
    fn transpose() {
        let a = Matrix::new([[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let t = a.transpose();

        assert_eq!(t.nrows(), 3);
        assert_eq!(t.ncols(), 2);
        assert_eq!(t[(0, 0)], 1.0);
        assert_eq!(t[(1, 0)], 2.0);
        assert_eq!(t[(2, 1)], 6.0);
    }

    #[test]
    fn display_canonical_dump() {
        let m = Matrix::new([[9, 8], [7, 6]]);
        assert_eq!(m.to_string(), "9 8\n7 6");

        let wide = Matrix::new([[1, 2, 3]]);
        assert_eq!(wide.to_string(), "1 2 3");

        let tall = Matrix::new([[1], [2]]);
        assert_eq!(tall.to_string(), "1\n2");
    }

    #[test]
    fn display_forwards_precision() {
        let m = Matrix::new([[1.0_f64, 0.5], [0.25, 2.0]]);
        assert_eq!(format!("{m:.2}"), "1.00 0.50\n0.25 2.00");
    }

    #[test]
    fn display_empty() {
        let m: Matrix<i32, 0, 0> = Matrix::default();
        assert_eq!(m.to_string(), "");
    }
}
