use core::fmt::{Debug, Display};
use num_traits::{Num, One, Zero};

#[cfg(feature = "complex")]
use num_complex::Complex;

/// The "is a number" capability required of matrix elements and of the
/// right-hand side of scalar multiplication.
///
/// Unlike a blanket bound, this is implemented explicitly for each supported
/// scalar kind, so the set of types that take part in
/// [type promotion](crate::promote) is closed and enumerable:
///
/// - signed integers `i8`, `i16`, `i32`, `i64`, `i128`
/// - unsigned integers `u8`, `u16`, `u32`, `u64`, `u128`
/// - floats `f32`, `f64`
/// - `Complex<f32>`, `Complex<f64>` (with the `complex` feature)
pub trait Number: Copy + PartialEq + Debug + Display + Zero + One + Num + 'static {}

macro_rules! impl_number {
    ($($t:ty),*) => {
        $( impl Number for $t {} )*
    };
}

impl_number!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, f32, f64);

#[cfg(feature = "complex")]
impl Number for Complex<f32> {}

#[cfg(feature = "complex")]
impl Number for Complex<f64> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_generic<T: Number>(xs: &[T]) -> T {
        xs.iter().fold(T::zero(), |acc, &x| acc + x)
    }

    #[test]
    fn number_identities() {
        assert_eq!(sum_generic(&[1_i32, 2, 3]), 6);
        assert_eq!(sum_generic(&[0.5_f64, 0.25]), 0.75);
        assert_eq!(u8::one() + u8::zero(), 1);
    }

    #[cfg(feature = "complex")]
    #[test]
    fn complex_is_number() {
        let z = sum_generic(&[Complex::new(1.0_f64, 2.0), Complex::new(3.0, -1.0)]);
        assert_eq!(z, Complex::new(4.0, 1.0));
    }
}
