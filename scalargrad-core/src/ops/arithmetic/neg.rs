// scalargrad-core/src/ops/arithmetic/neg.rs

use crate::autograd::{accumulate_grad, BackwardOp};
use crate::ops::Op;
use crate::scalar::Scalar;
use std::ops::Neg;
use std::rc::Rc;

// --- Forward Operation ---

/// Negates a graph node, recording the operation for the backward pass.
///
/// Direct rule; identical to the `a * -1` composition.
pub fn neg_op(a: &Scalar) -> Scalar {
    let data = -a.data();
    let grad_fn = NegBackward { input: a.clone() };
    Scalar::from_op(data, Op::Neg, Rc::new(grad_fn))
}

// --- Backward Operation ---

// For z = -a: grad(a) = -grad_output.
#[derive(Debug)]
struct NegBackward {
    input: Scalar,
}

impl BackwardOp for NegBackward {
    fn backward(&self, upstream: f64) {
        accumulate_grad(&self.input, -upstream);
    }

    fn inputs(&self) -> Vec<Scalar> {
        vec![self.input.clone()]
    }
}

// --- Operator Overloads ---

impl Neg for &Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        neg_op(self)
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        neg_op(&self)
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neg_forward() {
        let a = Scalar::new(2.0);
        let negated = -&a;

        assert_eq!(negated.data(), -2.0);
        assert_eq!(negated.op(), Op::Neg);
        assert_eq!(negated.predecessors().len(), 1);
    }

    #[test]
    fn test_neg_backward() {
        let a = Scalar::new(2.0);
        let negated = -&a;
        negated.backward();

        assert_eq!(a.grad(), -1.0);
    }

    #[test]
    fn test_double_negation() {
        let a = Scalar::new(1.5);
        let back = -(-&a);
        assert_eq!(back.data(), 1.5);

        back.backward();
        assert_eq!(a.grad(), 1.0);
    }
}
