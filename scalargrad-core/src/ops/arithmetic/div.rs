// scalargrad-core/src/ops/arithmetic/div.rs

use crate::autograd::{accumulate_grad, BackwardOp};
use crate::ops::Op;
use crate::scalar::Scalar;
use std::ops::Div;
use std::rc::Rc;

// --- Forward Operation ---

/// Divides `a` by `b`, recording the operation for the backward pass.
///
/// Division by zero follows IEEE-754 (`inf`/`NaN`), it is not an error.
pub fn div_op(a: &Scalar, b: &Scalar) -> Scalar {
    let data = a.data() / b.data();
    let grad_fn = DivBackward {
        lhs: a.clone(),
        rhs: b.clone(),
    };
    Scalar::from_op(data, Op::Div, Rc::new(grad_fn))
}

// --- Backward Operation ---

// For z = a / b:
// grad(a) = grad_output * (1 / b)
// grad(b) = grad_output * (-a / b^2)
// Direct rule; identical to the a * b^-1 composition.
#[derive(Debug)]
struct DivBackward {
    lhs: Scalar,
    rhs: Scalar,
}

impl BackwardOp for DivBackward {
    fn backward(&self, upstream: f64) {
        let a = self.lhs.data();
        let b = self.rhs.data();
        accumulate_grad(&self.lhs, upstream / b);
        accumulate_grad(&self.rhs, -a / (b * b) * upstream);
    }

    fn inputs(&self) -> Vec<Scalar> {
        vec![self.lhs.clone(), self.rhs.clone()]
    }
}

// --- Operator Overloads ---

impl Div for &Scalar {
    type Output = Scalar;

    fn div(self, rhs: &Scalar) -> Scalar {
        div_op(self, rhs)
    }
}

impl Div for Scalar {
    type Output = Scalar;

    fn div(self, rhs: Scalar) -> Scalar {
        div_op(&self, &rhs)
    }
}

impl Div<&Scalar> for Scalar {
    type Output = Scalar;

    fn div(self, rhs: &Scalar) -> Scalar {
        div_op(&self, rhs)
    }
}

impl Div<Scalar> for &Scalar {
    type Output = Scalar;

    fn div(self, rhs: Scalar) -> Scalar {
        div_op(self, &rhs)
    }
}

// A plain number on either side is lifted to a constant leaf node; the
// reflected form `k / x` is the same graph as `k * x^-1`.

impl Div<f64> for &Scalar {
    type Output = Scalar;

    fn div(self, rhs: f64) -> Scalar {
        div_op(self, &Scalar::new(rhs))
    }
}

impl Div<f64> for Scalar {
    type Output = Scalar;

    fn div(self, rhs: f64) -> Scalar {
        div_op(&self, &Scalar::new(rhs))
    }
}

impl Div<&Scalar> for f64 {
    type Output = Scalar;

    fn div(self, rhs: &Scalar) -> Scalar {
        div_op(&Scalar::new(self), rhs)
    }
}

impl Div<Scalar> for f64 {
    type Output = Scalar;

    fn div(self, rhs: Scalar) -> Scalar {
        div_op(&Scalar::new(self), &rhs)
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_div_forward() {
        let a = Scalar::new(4.0);
        let b = Scalar::new(2.0);
        let c = &a / &b;

        assert_eq!(c.data(), 2.0);
        assert_eq!(c.op(), Op::Div);
    }

    #[test]
    fn test_div_backward() {
        let a = Scalar::new(4.0);
        let b = Scalar::new(2.0);
        let c = &a / &b;
        c.backward();

        // grad(a) = 1/b = 0.5; grad(b) = -a/b^2 = -1.
        assert_eq!(a.grad(), 0.5);
        assert_eq!(b.grad(), -1.0);
    }

    #[test]
    fn test_div_reflected_is_reciprocal() {
        let b = Scalar::new(2.0);
        let reciprocal = 1.0 / &b;
        assert_eq!(reciprocal.data(), 0.5);

        reciprocal.backward();
        // d(1/b)/db = -1/b^2 = -0.25.
        assert_eq!(b.grad(), -0.25);

        // Matches the b^-1 power composition exactly.
        let b2 = Scalar::new(2.0);
        let powered = b2.powf(-1.0);
        assert_eq!(powered.data(), reciprocal.data());
        powered.backward();
        assert_eq!(b2.grad(), b.grad());
    }
}
