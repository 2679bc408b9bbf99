//! Canonical matrix constructors.
//!
//! These are the only functions that fill a matrix's storage directly;
//! everything else goes through the element-access API.
//!
//! Both constructors reject empty shapes at compile time:
//!
//! ```compile_fail
//! let m = linmat::factory::zero::<i32, 0, 3>();
//! ```
//!
//! and `eye` only exists for square shapes:
//!
//! ```compile_fail
//! let m: linmat::Matrix<i32, 2, 3> = linmat::factory::eye();
//! ```

use super::Matrix;
use crate::traits::Number;

/// An `R×C` matrix with every element set to `T::zero()`.
///
/// ```
/// use linmat::factory;
/// let z = factory::zero::<i32, 2, 3>();
/// assert!(z.iter().all(|&x| x == 0));
/// ```
pub fn zero<T: Number, const R: usize, const C: usize>() -> Matrix<T, R, C> {
    const { assert!(R > 0 && C > 0, "positive size for every dimension is required") };
    Matrix {
        data: [[T::zero(); C]; R],
    }
}

/// The `N×N` identity: [`zero`] with `T::one()` on the diagonal.
///
/// ```
/// use linmat::factory;
/// let id = factory::eye::<i32, 2>();
/// assert_eq!(id.to_string(), "1 0\n0 1");
/// ```
pub fn eye<T: Number, const N: usize>() -> Matrix<T, N, N> {
    let mut m = zero::<T, N, N>();
    for i in 0..N {
        m.data[i][i] = T::one();
    }
    m
}
