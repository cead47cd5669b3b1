// scalargrad-core/src/ops/arithmetic/sub.rs

use crate::autograd::{accumulate_grad, BackwardOp};
use crate::ops::Op;
use crate::scalar::Scalar;
use std::ops::Sub;
use std::rc::Rc;

// --- Forward Operation ---

/// Subtracts `b` from `a`, recording the operation for the backward pass.
pub fn sub_op(a: &Scalar, b: &Scalar) -> Scalar {
    let data = a.data() - b.data();
    let grad_fn = SubBackward {
        lhs: a.clone(),
        rhs: b.clone(),
    };
    Scalar::from_op(data, Op::Sub, Rc::new(grad_fn))
}

// --- Backward Operation ---

// For z = a - b: grad(a) = grad_output, grad(b) = -grad_output.
#[derive(Debug)]
struct SubBackward {
    lhs: Scalar,
    rhs: Scalar,
}

impl BackwardOp for SubBackward {
    fn backward(&self, upstream: f64) {
        accumulate_grad(&self.lhs, upstream);
        accumulate_grad(&self.rhs, -upstream);
    }

    fn inputs(&self) -> Vec<Scalar> {
        vec![self.lhs.clone(), self.rhs.clone()]
    }
}

// --- Operator Overloads ---

impl Sub for &Scalar {
    type Output = Scalar;

    fn sub(self, rhs: &Scalar) -> Scalar {
        sub_op(self, rhs)
    }
}

impl Sub for Scalar {
    type Output = Scalar;

    fn sub(self, rhs: Scalar) -> Scalar {
        sub_op(&self, &rhs)
    }
}

impl Sub<&Scalar> for Scalar {
    type Output = Scalar;

    fn sub(self, rhs: &Scalar) -> Scalar {
        sub_op(&self, rhs)
    }
}

impl Sub<Scalar> for &Scalar {
    type Output = Scalar;

    fn sub(self, rhs: Scalar) -> Scalar {
        sub_op(self, &rhs)
    }
}

// A plain number on either side is lifted to a constant leaf node; the
// reflected form `k - x` is the same graph as `-x + k`.

impl Sub<f64> for &Scalar {
    type Output = Scalar;

    fn sub(self, rhs: f64) -> Scalar {
        sub_op(self, &Scalar::new(rhs))
    }
}

impl Sub<f64> for Scalar {
    type Output = Scalar;

    fn sub(self, rhs: f64) -> Scalar {
        sub_op(&self, &Scalar::new(rhs))
    }
}

impl Sub<&Scalar> for f64 {
    type Output = Scalar;

    fn sub(self, rhs: &Scalar) -> Scalar {
        sub_op(&Scalar::new(self), rhs)
    }
}

impl Sub<Scalar> for f64 {
    type Output = Scalar;

    fn sub(self, rhs: Scalar) -> Scalar {
        sub_op(&Scalar::new(self), &rhs)
    }
}

// --- Tests ---
