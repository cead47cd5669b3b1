// src/scalar/debug.rs
use crate::ops::Op;
use crate::scalar::Scalar;
use std::fmt;

// Manual implementation of Debug trait
impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.data.borrow();
        write!(
            f,
            "Scalar(data={}, grad={}, op={:?})",
            guard.data, guard.grad, guard.op
        )
    }
}

impl fmt::Display for Scalar {
    /// Compact form used by graph renderers and training-loop printouts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.data.borrow();
        if guard.op == Op::Leaf {
            write!(f, "{:.4} (grad {:.4})", guard.data, guard.grad)
        } else {
            write!(f, "{:.4} (grad {:.4}, {})", guard.data, guard.grad, guard.op)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Scalar;

    #[test]
    fn test_debug_format() {
        let a = Scalar::new(1.5);
        assert_eq!(format!("{:?}", a), "Scalar(data=1.5, grad=0, op=Leaf)");
    }

    #[test]
    fn test_display_shows_op() {
        let a = Scalar::new(2.0);
        let b = &a * &a;
        assert_eq!(format!("{}", b), "4.0000 (grad 0.0000, *)");
    }
}
