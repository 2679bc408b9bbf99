//! Type-promotion resolver for mixed-type arithmetic.
//!
//! Every arithmetic operator on [`Matrix`](crate::Matrix) and
//! [`Vector`](crate::Vector) accepts operands of two (possibly different)
//! element types and picks the element type of its result through
//! [`Promote`]. The table follows the usual numeric promotion rules:
//!
//! | Operands                                   | Result                              |
//! |--------------------------------------------|-------------------------------------|
//! | `T`, `T`                                   | `T`                                 |
//! | narrower int, wider int (same signedness)  | the wider int                       |
//! | `iN`, `uM` with `M < N`                     | `iN`                                |
//! | `iN`, `uM` with `M >= N`, `M <= 64`          | `i{2M}`                             |
//! | any int, `f32`                             | `f32`                               |
//! | any int, `f64`                             | `f64`                               |
//! | `f32`, `f64`                               | `f64`                               |
//! | `Complex<F>`, `F2` or `Complex<F2>`        | `Complex<wider of F, F2>` (feature) |
//!
//! `u128` has no lossless signed partner, so it does not mix with signed
//! integers: such an expression fails to compile.
//!
//! ```
//! use linmat::promote::{self, ProductOf, SumOf};
//!
//! let x: SumOf<i32, f64> = promote::add(2_i32, 0.5_f64);
//! assert_eq!(x, 2.5);
//!
//! let y: ProductOf<u8, i8> = promote::mul(200_u8, -1_i8);
//! assert_eq!(y, -200_i16);
//! ```

use crate::traits::Number;

#[cfg(feature = "complex")]
use num_complex::Complex;

mod sealed {
    pub trait Sealed {}
}

/// Marker for an arithmetic operator class taking part in promotion.
pub trait Operation: sealed::Sealed {}

/// Addition and subtraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Additive {}

/// Multiplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Multiplicative {}

impl sealed::Sealed for Additive {}
impl sealed::Sealed for Multiplicative {}
impl Operation for Additive {}
impl Operation for Multiplicative {}

/// Maps `(Self, Rhs, Op)` to the result element type and converts both
/// operands into it.
pub trait Promote<Rhs: Number, Op: Operation>: Number {
    /// Result element type.
    type Output: Number;

    /// Convert the left operand into the result type.
    fn promote_lhs(self) -> <Self as Promote<Rhs, Op>>::Output;

    /// Convert the right operand into the result type.
    fn promote_rhs(rhs: Rhs) -> <Self as Promote<Rhs, Op>>::Output;
}

/// Result type of `A + B` and `A - B`.
pub type SumOf<A, B> = <A as Promote<B, Additive>>::Output;

/// Result type of `A * B`.
pub type ProductOf<A, B> = <A as Promote<B, Multiplicative>>::Output;

/// Accumulator type of a dot product between `A` and `B` elements:
/// products are promoted first, then summed.
pub type AccumulatorOf<A, B> = SumOf<ProductOf<A, B>, ProductOf<A, B>>;

/// `a + b` in the promoted type.
#[inline]
pub fn add<A: Promote<B, Additive>, B: Number>(a: A, b: B) -> SumOf<A, B> {
    <A as Promote<B, Additive>>::promote_lhs(a) + <A as Promote<B, Additive>>::promote_rhs(b)
}

/// `a - b` in the promoted type.
#[inline]
pub fn sub<A: Promote<B, Additive>, B: Number>(a: A, b: B) -> SumOf<A, B> {
    <A as Promote<B, Additive>>::promote_lhs(a) - <A as Promote<B, Additive>>::promote_rhs(b)
}

/// `a * b` in the promoted type.
#[inline]
pub fn mul<A: Promote<B, Multiplicative>, B: Number>(a: A, b: B) -> ProductOf<A, B> {
    <A as Promote<B, Multiplicative>>::promote_lhs(a)
        * <A as Promote<B, Multiplicative>>::promote_rhs(b)
}

// ── Primitive table ─────────────────────────────────────────────────

macro_rules! promote_self {
    ($($t:ty),*) => {
        $(
            impl<Op: Operation> Promote<$t, Op> for $t {
                type Output = $t;
                #[inline] fn promote_lhs(self) -> $t { self }
                #[inline] fn promote_rhs(rhs: $t) -> $t { rhs }
            }
        )*
    };
}

// Emits both operand orders for each `(a, b) => out` entry.
macro_rules! promote_pair {
    ($(($a:ty, $b:ty) => $out:ty;)*) => {
        $(
            impl<Op: Operation> Promote<$b, Op> for $a {
                type Output = $out;
                #[inline] fn promote_lhs(self) -> $out { self as $out }
                #[inline] fn promote_rhs(rhs: $b) -> $out { rhs as $out }
            }

            impl<Op: Operation> Promote<$a, Op> for $b {
                type Output = $out;
                #[inline] fn promote_lhs(self) -> $out { self as $out }
                #[inline] fn promote_rhs(rhs: $a) -> $out { rhs as $out }
            }
        )*
    };
}

// All integers against one float type.
macro_rules! promote_ints_to_float {
    ($f:ty: $($i:ty),*) => {
        promote_pair! { $(($i, $f) => $f;)* }
    };
}

promote_self!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, f32, f64);

promote_pair! {
    // signed widening
    (i8, i16) => i16;
    (i8, i32) => i32;
    (i8, i64) => i64;
    (i8, i128) => i128;
    (i16, i32) => i32;
    (i16, i64) => i64;
    (i16, i128) => i128;
    (i32, i64) => i64;
    (i32, i128) => i128;
    (i64, i128) => i128;

    // unsigned widening
    (u8, u16) => u16;
    (u8, u32) => u32;
    (u8, u64) => u64;
    (u8, u128) => u128;
    (u16, u32) => u32;
    (u16, u64) => u64;
    (u16, u128) => u128;
    (u32, u64) => u64;
    (u32, u128) => u128;
    (u64, u128) => u128;

    // mixed signedness
    (i8, u8) => i16;
    (i8, u16) => i32;
    (i8, u32) => i64;
    (i8, u64) => i128;
    (i16, u8) => i16;
    (i16, u16) => i32;
    (i16, u32) => i64;
    (i16, u64) => i128;
    (i32, u8) => i32;
    (i32, u16) => i32;
    (i32, u32) => i64;
    (i32, u64) => i128;
    (i64, u8) => i64;
    (i64, u16) => i64;
    (i64, u32) => i64;
    (i64, u64) => i128;
    (i128, u8) => i128;
    (i128, u16) => i128;
    (i128, u32) => i128;
    (i128, u64) => i128;

    (f32, f64) => f64;
}

promote_ints_to_float!(f32: i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);
promote_ints_to_float!(f64: i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

// ── Complex entries ─────────────────────────────────────────────────

#[cfg(feature = "complex")]
macro_rules! promote_complex {
    ($(($a:ty, $b:ty) => $out:ty: |$x:ident| $lhs:expr, |$y:ident| $rhs:expr;)*) => {
        $(
            impl<Op: Operation> Promote<$b, Op> for $a {
                type Output = $out;
                #[inline] fn promote_lhs(self) -> $out { let $x = self; $lhs }
                #[inline] fn promote_rhs(rhs: $b) -> $out { let $y = rhs; $rhs }
            }
        )*
    };
}

#[cfg(feature = "complex")]
promote_complex! {
    (Complex<f32>, Complex<f32>) => Complex<f32>: |z| z, |w| w;
    (Complex<f64>, Complex<f64>) => Complex<f64>: |z| z, |w| w;

    (Complex<f32>, Complex<f64>) => Complex<f64>:
        |z| Complex::new(z.re as f64, z.im as f64), |w| w;
    (Complex<f64>, Complex<f32>) => Complex<f64>:
        |z| z, |w| Complex::new(w.re as f64, w.im as f64);

    (Complex<f32>, f32) => Complex<f32>: |z| z, |x| Complex::new(x, 0.0);
    (f32, Complex<f32>) => Complex<f32>: |x| Complex::new(x, 0.0), |z| z;
    (Complex<f64>, f64) => Complex<f64>: |z| z, |x| Complex::new(x, 0.0);
    (f64, Complex<f64>) => Complex<f64>: |x| Complex::new(x, 0.0), |z| z;

    (Complex<f32>, f64) => Complex<f64>:
        |z| Complex::new(z.re as f64, z.im as f64), |x| Complex::new(x, 0.0);
    (f64, Complex<f32>) => Complex<f64>:
        |x| Complex::new(x, 0.0), |z| Complex::new(z.re as f64, z.im as f64);
    (Complex<f64>, f32) => Complex<f64>: |z| z, |x| Complex::new(x as f64, 0.0);
    (f32, Complex<f64>) => Complex<f64>: |x| Complex::new(x as f64, 0.0), |z| z;
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::any::TypeId;

    fn same<A: 'static, B: 'static>() -> bool {
        TypeId::of::<A>() == TypeId::of::<B>()
    }

    #[test]
    fn identity_promotion() {
        assert!(same::<SumOf<i32, i32>, i32>());
        assert!(same::<ProductOf<f32, f32>, f32>());
        assert!(same::<AccumulatorOf<u8, u8>, u8>());
    }

    #[test]
    fn int_float_promotes_to_float() {
        assert!(same::<SumOf<i32, f64>, f64>());
        assert!(same::<SumOf<f64, i32>, f64>());
        assert!(same::<ProductOf<u64, f32>, f32>());
        assert!(same::<SumOf<f32, f64>, f64>());
    }

    #[test]
    fn integer_widening() {
        assert!(same::<SumOf<i8, i64>, i64>());
        assert!(same::<ProductOf<u32, u16>, u32>());
        assert!(same::<SumOf<i32, u8>, i32>());
        assert!(same::<SumOf<i32, u32>, i64>());
        assert!(same::<SumOf<u64, i8>, i128>());
    }

    #[test]
    fn accumulator_of_mixed() {
        assert!(same::<AccumulatorOf<i32, f64>, f64>());
        assert!(same::<AccumulatorOf<i16, u16>, i32>());
    }

    #[test]
    fn operand_conversions() {
        assert_eq!(<i32 as Promote<f64, Additive>>::promote_lhs(3), 3.0_f64);
        assert_eq!(<u8 as Promote<i8, Multiplicative>>::promote_rhs(-4), -4_i16);
        assert_eq!(<f32 as Promote<f32, Additive>>::promote_rhs(0.5), 0.5_f32);
    }

    #[test]
    fn promoted_arithmetic_values() {
        assert_eq!(add(1_i32, 0.5_f64), 1.5);
        assert_eq!(sub(3_u8, 5_i8), -2_i16);
        assert_eq!(mul(u32::MAX, 2_i32), 2 * u32::MAX as i64);
        assert_eq!(mul(3_i64, 0.5_f32), 1.5_f32);
    }

    #[test]
    fn symmetric_table() {
        assert!(same::<SumOf<u16, i8>, SumOf<i8, u16>>());
        assert!(same::<ProductOf<f32, i128>, ProductOf<i128, f32>>());
    }

    #[cfg(feature = "complex")]
    #[test]
    fn complex_promotion() {
        assert!(same::<SumOf<Complex<f32>, f64>, Complex<f64>>());
        let z = mul(Complex::new(1.0_f32, 2.0), 2.0_f64);
        assert_eq!(z, Complex::new(2.0_f64, 4.0));
        assert_eq!(add(1.0_f64, Complex::new(0.0_f64, 1.0)), Complex::new(1.0, 1.0));
    }
}
