use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::promote::{
    self, AccumulatorOf, Additive, Multiplicative, ProductOf, Promote, SumOf,
};
use crate::traits::Number;
use crate::Matrix;

// ── Element-wise addition ───────────────────────────────────────────

impl<T, U, const R: usize, const C: usize> Add<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: Promote<U, Additive>,
    U: Number,
{
    type Output = Matrix<SumOf<T, U>, R, C>;

    fn add(self, rhs: Matrix<U, R, C>) -> Self::Output {
        Matrix::from_fn(|r, c| promote::add(self[(r, c)], rhs[(r, c)]))
    }
}

// ── Element-wise subtraction ────────────────────────────────────────

impl<T, U, const R: usize, const C: usize> Sub<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: Promote<U, Additive>,
    U: Number,
{
    type Output = Matrix<SumOf<T, U>, R, C>;

    fn sub(self, rhs: Matrix<U, R, C>) -> Self::Output {
        Matrix::from_fn(|r, c| promote::sub(self[(r, c)], rhs[(r, c)]))
    }
}

// ── In-place variants ───────────────────────────────────────────────
// Only when the promoted type is the left operand's own type.

impl<T, U, const R: usize, const C: usize> AddAssign<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: Promote<U, Additive, Output = T>,
    U: Number,
{
    fn add_assign(&mut self, rhs: Matrix<U, R, C>) {
        *self = *self + rhs;
    }
}

impl<T, U, const R: usize, const C: usize> SubAssign<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: Promote<U, Additive, Output = T>,
    U: Number,
{
    fn sub_assign(&mut self, rhs: Matrix<U, R, C>) {
        *self = *self - rhs;
    }
}

impl<T, S, const R: usize, const C: usize> MulAssign<S> for Matrix<T, R, C>
where
    T: Promote<S, Multiplicative, Output = T>,
    S: Number,
{
    fn mul_assign(&mut self, rhs: S) {
        *self = *self * rhs;
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: Number + Neg<Output = T>, const R: usize, const C: usize> Neg for Matrix<T, R, C> {
    type Output = Self;

    fn neg(self) -> Self {
        Matrix::from_fn(|r, c| -self[(r, c)])
    }
}

impl<T: Number + Neg<Output = T>, const R: usize, const C: usize> Neg for &Matrix<T, R, C> {
    type Output = Matrix<T, R, C>;

    fn neg(self) -> Matrix<T, R, C> {
        (*self).neg()
    }
}

// ── Matrix multiplication: (R×K) * (K×P) → (R×P) ──────────────────
// Element (r, c) is row r of the left operand dotted with column c of the right.

impl<T, U, const R: usize, const K: usize, const P: usize> Mul<Matrix<U, K, P>>
    for Matrix<T, R, K>
where
    T: Promote<U, Multiplicative>,
    U: Number,
    ProductOf<T, U>: Promote<ProductOf<T, U>, Additive>,
{
    type Output = Matrix<AccumulatorOf<T, U>, R, P>;

    fn mul(self, rhs: Matrix<U, K, P>) -> Self::Output {
        Matrix::from_fn(|r, c| self.row_view(r).dot(&rhs.col_view(c)))
    }
}

// ── Scalar multiplication: matrix * scalar ──────────────────────────

impl<T, S, const R: usize, const C: usize> Mul<S> for Matrix<T, R, C>
where
    T: Promote<S, Multiplicative>,
    S: Number,
{
    type Output = Matrix<ProductOf<T, S>, R, C>;

    fn mul(self, rhs: S) -> Self::Output {
        Matrix::from_fn(|r, c| promote::mul(self[(r, c)], rhs))
    }
}

impl<T, S, const R: usize, const C: usize> Mul<S> for &Matrix<T, R, C>
where
    T: Promote<S, Multiplicative>,
    S: Number,
{
    type Output = Matrix<ProductOf<T, S>, R, C>;

    fn mul(self, rhs: S) -> Self::Output {
        (*self).mul(rhs)
    }
}

// ── Reference variants for element-wise ops ─────────────────────────
// Matrix of numbers is Copy, so &Matrix ops just deref and delegate.

macro_rules! forward_ref_binop {
    ($Op:ident, $method:ident) => {
        impl<T, U, const R: usize, const C: usize> $Op<Matrix<U, R, C>> for &Matrix<T, R, C>
        where
            T: Promote<U, Additive>,
            U: Number,
        {
            type Output = Matrix<SumOf<T, U>, R, C>;
            fn $method(self, rhs: Matrix<U, R, C>) -> Self::Output {
                (*self).$method(rhs)
            }
        }

        impl<T, U, const R: usize, const C: usize> $Op<&Matrix<U, R, C>> for Matrix<T, R, C>
        where
            T: Promote<U, Additive>,
            U: Number,
        {
            type Output = Matrix<SumOf<T, U>, R, C>;
            fn $method(self, rhs: &Matrix<U, R, C>) -> Self::Output {
                self.$method(*rhs)
            }
        }

        impl<T, U, const R: usize, const C: usize> $Op<&Matrix<U, R, C>> for &Matrix<T, R, C>
        where
            T: Promote<U, Additive>,
            U: Number,
        {
            type Output = Matrix<SumOf<T, U>, R, C>;
            fn $method(self, rhs: &Matrix<U, R, C>) -> Self::Output {
                (*self).$method(*rhs)
            }
        }
    };
}

forward_ref_binop!(Add, add);
forward_ref_binop!(Sub, sub);

// ── Reference variants for matrix multiplication ────────────────────

impl<T, U, const R: usize, const K: usize, const P: usize> Mul<Matrix<U, K, P>>
    for &Matrix<T, R, K>
where
    T: Promote<U, Multiplicative>,
    U: Number,
    ProductOf<T, U>: Promote<ProductOf<T, U>, Additive>,
{
    type Output = Matrix<AccumulatorOf<T, U>, R, P>;
    fn mul(self, rhs: Matrix<U, K, P>) -> Self::Output {
        (*self).mul(rhs)
    }
}

impl<T, U, const R: usize, const K: usize, const P: usize> Mul<&Matrix<U, K, P>>
    for Matrix<T, R, K>
where
    T: Promote<U, Multiplicative>,
    U: Number,
    ProductOf<T, U>: Promote<ProductOf<T, U>, Additive>,
{
    type Output = Matrix<AccumulatorOf<T, U>, R, P>;
    fn mul(self, rhs: &Matrix<U, K, P>) -> Self::Output {
        self.mul(*rhs)
    }
}

impl<T, U, const R: usize, const K: usize, const P: usize> Mul<&Matrix<U, K, P>>
    for &Matrix<T, R, K>
where
    T: Promote<U, Multiplicative>,
    U: Number,
    ProductOf<T, U>: Promote<ProductOf<T, U>, Additive>,
{
    type Output = Matrix<AccumulatorOf<T, U>, R, P>;
    fn mul(self, rhs: &Matrix<U, K, P>) -> Self::Output {
        (*self).mul(*rhs)
    }
}

// ── scalar * matrix (concrete impls to avoid orphan rules) ──────────

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl<T, const R: usize, const C: usize> Mul<Matrix<T, R, C>> for $t
            where
                T: Promote<$t, Multiplicative>,
            {
                type Output = Matrix<ProductOf<T, $t>, R, C>;

                fn mul(self, rhs: Matrix<T, R, C>) -> Self::Output {
                    rhs * self
                }
            }

            impl<T, const R: usize, const C: usize> Mul<&Matrix<T, R, C>> for $t
            where
                T: Promote<$t, Multiplicative>,
            {
                type Output = Matrix<ProductOf<T, $t>, R, C>;

                fn mul(self, rhs: &Matrix<T, R, C>) -> Self::Output {
                    *rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

#[cfg(feature = "complex")]
impl_scalar_mul!(num_complex::Complex<f32>, num_complex::Complex<f64>);
