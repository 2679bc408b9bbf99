//! # linmat
//!
//! Fixed-size numeric matrices and vectors with const-generic dimensions,
//! no-std compatible. Shape errors are compile errors; only index errors
//! exist at runtime.
//!
//! ## Quick start
//!
//! ```
//! use linmat::{factory, Matrix, Vector};
//!
//! let id = factory::eye::<i32, 2>();
//! assert_eq!(id.to_string(), "1 0\n0 1");
//! assert_eq!((id * 2_i32).to_string(), "2 0\n0 2");
//!
//! // Mixed element types promote: i32 * f64 → f64
//! let c = Matrix::new([[1_i32, 2, 3], [1, 3, 4]]);
//! let half: Matrix<f64, 2, 3> = c * 0.5_f64;
//! assert_eq!(half[(1, 2)], 2.0);
//!
//! // Borrowed row/column views
//! assert_eq!(c.col(2).unwrap().to_array(), [3, 4]);
//!
//! let v = Vector::from_array([1_i32, 1, 1]);
//! assert_eq!(c * v, Vector::from_array([6, 8]));
//! ```
//!
//! Mismatched shapes are rejected by the type checker:
//!
//! ```compile_fail
//! use linmat::Matrix;
//! let a: Matrix<i32, 2, 3> = Matrix::zeros();
//! let b: Matrix<i32, 2, 3> = Matrix::zeros();
//! let _ = a * b; // inner dimensions 3 and 2 differ
//! ```
//!
//! ```compile_fail
//! use linmat::Matrix;
//! let a: Matrix<i32, 2, 2> = Matrix::zeros();
//! let b: Matrix<i32, 2, 3> = Matrix::zeros();
//! let _ = a + b;
//! ```
//!
//! ## Modules
//!
//! - [`matrix`]: `Matrix<T, R, C>` with row-major `[[T; C]; R]` storage,
//!   bounds-checked access, arithmetic, casts, and the canonical text dump.
//!   [`Vector<T, N>`] is the one-column counterpart.
//! - [`view`]: [`View`] / [`ViewMut`], the strided row and column views
//!   returned by `row`, `col`, and their `_mut` forms.
//! - [`factory`]: [`factory::zero`] and [`factory::eye`].
//! - [`promote`]: the explicit `(T1, T2, op) → T` promotion table used by
//!   every operator.
//! - [`traits`]: [`Number`], the closed set of supported scalar kinds.
//!
//! ## Cargo features
//!
//! | Feature   | Default | Description |
//! |-----------|---------|-------------|
//! | `std`     | yes     | `std::error::Error` for [`MatrixError`] |
//! | `complex` | no      | `Complex<f32>` / `Complex<f64>` scalars via `num-complex` |
//! | `all`     | no      | All features: `std` + `complex` |

#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod error;
pub mod matrix;
pub mod promote;
pub mod traits;

pub use error::{Axis, MatrixError};
pub use matrix::factory;
pub use matrix::vector::Vector;
pub use matrix::view::{self, View, ViewMut};
pub use matrix::Matrix;
pub use promote::{AccumulatorOf, ProductOf, Promote, SumOf};
pub use traits::Number;

#[cfg(feature = "complex")]
pub use num_complex::Complex;
