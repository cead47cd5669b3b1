// scalargrad-core/src/ops/arithmetic/add.rs

use crate::autograd::{accumulate_grad, BackwardOp};
use crate::ops::Op;
use crate::scalar::Scalar;
use std::ops::Add;
use std::rc::Rc;

// --- Forward Operation ---

/// Adds two graph nodes, recording the operation for the backward pass.
pub fn add_op(a: &Scalar, b: &Scalar) -> Scalar {
    let data = a.data() + b.data();
    let grad_fn = AddBackward {
        lhs: a.clone(),
        rhs: b.clone(),
    };
    Scalar::from_op(data, Op::Add, Rc::new(grad_fn))
}

// --- Backward Operation ---

// For z = a + b: grad(a) = grad_output, grad(b) = grad_output.
#[derive(Debug)]
struct AddBackward {
    lhs: Scalar,
    rhs: Scalar,
}

impl BackwardOp for AddBackward {
    fn backward(&self, upstream: f64) {
        accumulate_grad(&self.lhs, upstream);
        accumulate_grad(&self.rhs, upstream);
    }

    fn inputs(&self) -> Vec<Scalar> {
        vec![self.lhs.clone(), self.rhs.clone()]
    }
}

// --- Operator Overloads ---

impl Add for &Scalar {
    type Output = Scalar;

    fn add(self, rhs: &Scalar) -> Scalar {
        add_op(self, rhs)
    }
}

impl Add for Scalar {
    type Output = Scalar;

    fn add(self, rhs: Scalar) -> Scalar {
        add_op(&self, &rhs)
    }
}

impl Add<&Scalar> for Scalar {
    type Output = Scalar;

    fn add(self, rhs: &Scalar) -> Scalar {
        add_op(&self, rhs)
    }
}

impl Add<Scalar> for &Scalar {
    type Output = Scalar;

    fn add(self, rhs: Scalar) -> Scalar {
        add_op(self, &rhs)
    }
}

// A plain number on either side is lifted to a constant leaf node.

impl Add<f64> for &Scalar {
    type Output = Scalar;

    fn add(self, rhs: f64) -> Scalar {
        add_op(self, &Scalar::new(rhs))
    }
}

impl Add<f64> for Scalar {
    type Output = Scalar;

    fn add(self, rhs: f64) -> Scalar {
        add_op(&self, &Scalar::new(rhs))
    }
}

impl Add<&Scalar> for f64 {
    type Output = Scalar;

    fn add(self, rhs: &Scalar) -> Scalar {
        add_op(&Scalar::new(self), rhs)
    }
}

impl Add<Scalar> for f64 {
    type Output = Scalar;

    fn add(self, rhs: Scalar) -> Scalar {
        add_op(&Scalar::new(self), &rhs)
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_forward() {
        let a = Scalar::new(2.0);
        let b = Scalar::new(3.0);
        let c = &a + &b;

        assert_eq!(c.data(), 5.0);
        assert_eq!(c.op(), Op::Add);
        assert_eq!(c.predecessors().len(), 2);
        assert!(c.predecessors()[0].ptr_eq(&a));
        assert!(c.predecessors()[1].ptr_eq(&b));
    }

    #[test]
    fn test_add_backward() {
        let a = Scalar::new(2.0);
        let b = Scalar::new(3.0);
        let c = &a + &b;
        c.backward();

        assert_eq!(a.grad(), 1.0);
        assert_eq!(b.grad(), 1.0);
    }

    #[test]
    fn test_add_scalar_coercion() {
        let a = Scalar::new(2.0);

        let left = &a + 1.0;
        assert_eq!(left.data(), 3.0);

        let right = 1.0 + &a;
        assert_eq!(right.data(), 3.0);

        right.backward();
        assert_eq!(a.grad(), 1.0);
        // The lifted constant is an ordinary leaf predecessor.
        assert!(right.predecessors()[0].is_leaf());
    }

    #[test]
    fn test_add_same_operand_twice() {
        let a = Scalar::new(2.0);
        let doubled = &a + &a;
        doubled.backward();

        // Both contributions land on the same accumulator.
        assert_eq!(doubled.data(), 4.0);
        assert_eq!(a.grad(), 2.0);
    }
}
