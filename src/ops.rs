//! `std::ops` implementations for [`Vector`].
//!
//! The binary vector operators mirror the checked methods on [`Vector`] and
//! panic on dimension mismatch, like `Index` does for a bad index; callers
//! that want a recoverable error use `checked_add`, `checked_sub` or `dot`.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign,
};

use crate::Vector;

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl Add<&Vector> for &Vector {
    type Output = Vector;

    fn add(self, rhs: &Vector) -> Vector {
        self.checked_add(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl Add<Vector> for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        &self + &rhs
    }
}

impl Sub<&Vector> for &Vector {
    type Output = Vector;

    fn sub(self, rhs: &Vector) -> Vector {
        self.checked_sub(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl Sub<Vector> for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        &self - &rhs
    }
}

// Vector * vector is the dot product, a scalar.
impl Mul<&Vector> for &Vector {
    type Output = f64;

    fn mul(self, rhs: &Vector) -> f64 {
        self.dot(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl Mul<Vector> for Vector {
    type Output = f64;

    fn mul(self, rhs: Vector) -> f64 {
        &self * &rhs
    }
}

impl AddAssign<&Vector> for Vector {
    fn add_assign(&mut self, rhs: &Vector) {
        *self = &*self + rhs;
    }
}

impl SubAssign<&Vector> for Vector {
    fn sub_assign(&mut self, rhs: &Vector) {
        *self = &*self - rhs;
    }
}

impl Add<f64> for &Vector {
    type Output = Vector;

    fn add(self, rhs: f64) -> Vector {
        self.mapv(|v| v + rhs)
    }
}

impl Add<f64> for Vector {
    type Output = Vector;

    fn add(self, rhs: f64) -> Vector {
        &self + rhs
    }
}

impl Sub<f64> for &Vector {
    type Output = Vector;

    fn sub(self, rhs: f64) -> Vector {
        self.mapv(|v| v - rhs)
    }
}

impl Sub<f64> for Vector {
    type Output = Vector;

    fn sub(self, rhs: f64) -> Vector {
        &self - rhs
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.mapv(|v| v * rhs)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        &self * rhs
    }
}

// Division by zero is not guarded; components follow IEEE-754 and come out
// as infinities or NaN.
impl Div<f64> for &Vector {
    type Output = Vector;

    fn div(self, rhs: f64) -> Vector {
        self.mapv(|v| v / rhs)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, rhs: f64) -> Vector {
        &self / rhs
    }
}

impl AddAssign<f64> for Vector {
    fn add_assign(&mut self, rhs: f64) {
        *self = &*self + rhs;
    }
}

impl SubAssign<f64> for Vector {
    fn sub_assign(&mut self, rhs: f64) {
        *self = &*self - rhs;
    }
}

impl MulAssign<f64> for Vector {
    fn mul_assign(&mut self, rhs: f64) {
        *self = &*self * rhs;
    }
}

impl DivAssign<f64> for Vector {
    fn div_assign(&mut self, rhs: f64) {
        *self = &*self / rhs;
    }
}
