use core::fmt;

/// Which index of an access was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Row index of a matrix.
    Row,
    /// Column index of a matrix.
    Column,
    /// Position within a vector or view.
    Element,
}

/// Errors from runtime element access and sequence construction.
///
/// Shape mismatches never show up here: dimensions are type parameters, so
/// an ill-shaped operation fails to compile instead.
///
/// ```
/// use linmat::{Axis, Matrix, MatrixError};
///
/// let m: Matrix<i32, 2, 3> = Matrix::zeros();
/// assert_eq!(
///     m.at(0, 3).unwrap_err(),
///     MatrixError::OutOfRange { axis: Axis::Column, index: 3, bound: 3 },
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// An index was not below its declared bound.
    OutOfRange { axis: Axis, index: usize, bound: usize },
    /// A sequence constructor received the wrong number of elements.
    LengthMismatch { expected: usize, found: usize },
}

impl MatrixError {
    /// Check `index < bound`, reporting the failing axis otherwise.
    #[inline]
    pub(crate) fn check(axis: Axis, index: usize, bound: usize) -> Result<(), MatrixError> {
        if index < bound {
            Ok(())
        } else {
            Err(MatrixError::OutOfRange { axis, index, bound })
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
            Axis::Element => write!(f, "element"),
        }
    }
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::OutOfRange { axis, index, bound } => {
                write!(f, "{axis} index {index} out of range (bound {bound})")
            }
            MatrixError::LengthMismatch { expected, found } => {
                write!(f, "expected {expected} elements, found {found}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatrixError {}
