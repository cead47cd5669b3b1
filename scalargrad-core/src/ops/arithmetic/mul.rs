// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::autograd::{accumulate_grad, BackwardOp};
use crate::ops::Op;
use crate::scalar::Scalar;
use std::ops::Mul;
use std::rc::Rc;

// --- Forward Operation ---

/// Multiplies two graph nodes, recording the operation for the backward pass.
pub fn mul_op(a: &Scalar, b: &Scalar) -> Scalar {
    let data = a.data() * b.data();
    let grad_fn = MulBackward {
        lhs: a.clone(),
        rhs: b.clone(),
    };
    Scalar::from_op(data, Op::Mul, Rc::new(grad_fn))
}

// --- Backward Operation ---

// For z = a * b: grad(a) = b * grad_output, grad(b) = a * grad_output.
#[derive(Debug)]
struct MulBackward {
    lhs: Scalar,
    rhs: Scalar,
}

impl BackwardOp for MulBackward {
    fn backward(&self, upstream: f64) {
        accumulate_grad(&self.lhs, self.rhs.data() * upstream);
        accumulate_grad(&self.rhs, self.lhs.data() * upstream);
    }

    fn inputs(&self) -> Vec<Scalar> {
        vec![self.lhs.clone(), self.rhs.clone()]
    }
}

// --- Operator Overloads ---

impl Mul for &Scalar {
    type Output = Scalar;

    fn mul(self, rhs: &Scalar) -> Scalar {
        mul_op(self, rhs)
    }
}

impl Mul for Scalar {
    type Output = Scalar;

    fn mul(self, rhs: Scalar) -> Scalar {
        mul_op(&self, &rhs)
    }
}

impl Mul<&Scalar> for Scalar {
    type Output = Scalar;

    fn mul(self, rhs: &Scalar) -> Scalar {
        mul_op(&self, rhs)
    }
}

impl Mul<Scalar> for &Scalar {
    type Output = Scalar;

    fn mul(self, rhs: Scalar) -> Scalar {
        mul_op(self, &rhs)
    }
}

// A plain number on either side is lifted to a constant leaf node.

impl Mul<f64> for &Scalar {
    type Output = Scalar;

    fn mul(self, rhs: f64) -> Scalar {
        mul_op(self, &Scalar::new(rhs))
    }
}

impl Mul<f64> for Scalar {
    type Output = Scalar;

    fn mul(self, rhs: f64) -> Scalar {
        mul_op(&self, &Scalar::new(rhs))
    }
}

impl Mul<&Scalar> for f64 {
    type Output = Scalar;

    fn mul(self, rhs: &Scalar) -> Scalar {
        mul_op(&Scalar::new(self), rhs)
    }
}

impl Mul<Scalar> for f64 {
    type Output = Scalar;

    fn mul(self, rhs: Scalar) -> Scalar {
        mul_op(&Scalar::new(self), &rhs)
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_forward() {
        let a = Scalar::new(2.0);
        let b = Scalar::new(3.0);
        let c = &a * &b;

        assert_eq!(c.data(), 6.0);
        assert_eq!(c.op(), Op::Mul);
    }

    #[test]
    fn test_mul_backward() {
        let a = Scalar::new(2.0);
        let b = Scalar::new(3.0);
        let c = &a * &b;
        c.backward();

        // Each operand receives the other's forward value.
        assert_eq!(a.grad(), 3.0);
        assert_eq!(b.grad(), 2.0);
    }

    #[test]
    fn test_mul_scalar_coercion() {
        let a = Scalar::new(3.0);
        let scaled = 4.0 * &a;
        assert_eq!(scaled.data(), 12.0);

        scaled.backward();
        assert_eq!(a.grad(), 4.0);
    }

    #[test]
    fn test_mul_square_accumulates_both_paths() {
        // z = a * a: grad(a) = a * g + a * g = 2a.
        let a = Scalar::new(3.0);
        let squared = &a * &a;
        squared.backward();

        assert_eq!(squared.data(), 9.0);
        assert_eq!(a.grad(), 6.0);
    }
}
