#![cfg(feature = "complex")]

use linmat::{Complex, Matrix, Vector};

type C32 = Complex<f32>;
type C64 = Complex<f64>;

fn c(re: f64, im: f64) -> C64 {
    Complex::new(re, im)
}

#[test]
fn complex_plus_real_promotes_to_complex() {
    let z = Matrix::new([[c(1.0, 1.0), c(0.0, -2.0)]]);
    let x = Matrix::new([[0.5_f64, 2.0]]);
    let sum: Matrix<C64, 1, 2> = z + x;
    assert_eq!(sum, Matrix::new([[c(1.5, 1.0), c(2.0, -2.0)]]));
}

#[test]
fn narrow_complex_times_wide_real_widens() {
    let z = Matrix::new([[C32::new(1.0, 2.0)], [C32::new(-1.0, 0.5)]]);
    let scaled: Matrix<C64, 2, 1> = z * 2.0_f64;
    assert_eq!(scaled, Matrix::new([[c(2.0, 4.0)], [c(-2.0, 1.0)]]));

    let left: Matrix<C64, 2, 1> = 2.0_f64 * z;
    assert_eq!(left, scaled);
}

#[test]
fn complex_matrix_product() {
    // [[i, 0], [0, i]] squared is -I
    let i = Matrix::new([[c(0.0, 1.0), c(0.0, 0.0)], [c(0.0, 0.0), c(0.0, 1.0)]]);
    let minus_id: Matrix<C64, 2, 2> = Matrix::<C64, 2, 2>::eye() * -1.0_f64;
    assert_eq!(i * i, minus_id);
}

#[test]
fn real_matrix_times_complex_vector() {
    let a = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
    let v = Vector::from_array([c(1.0, 0.0), c(0.0, 1.0)]);
    let w: Vector<C64, 2> = a * v;
    assert_eq!(w, Vector::from_array([c(1.0, 2.0), c(3.0, 4.0)]));
}

#[test]
fn complex_display() {
    let z = Matrix::new([[c(1.0, 2.0), c(3.0, -1.0)]]);
    assert_eq!(z.to_string(), "1+2i 3-1i");
}
