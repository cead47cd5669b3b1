// src/scalar/mod.rs

use crate::autograd::BackwardOp;
use crate::ops::Op;
use crate::scalar_data::ScalarData;
use std::cell::RefCell;
use std::rc::Rc;

// --- Define implementation submodules ---
mod autograd_methods;
mod debug;

/// A scalar value participating in a differentiable computation graph.
///
/// `Scalar` uses `Rc<RefCell<ScalarData>>` internally to allow for:
/// 1.  **Shared Ownership:** a node may be the predecessor of many consumers
///     (diamond sharing in the DAG); every consumer holds a cheap handle to
///     the same underlying node, and the node lives as long as its longest
///     holder.
/// 2.  **Interior Mutability:** the `grad` accumulator is mutated through
///     immutable handles during a backward pass.
///
/// Every arithmetic or activation call produces a fresh `Scalar` recording
/// its operands, so evaluating an expression builds the graph that
/// [`backward`](Scalar::backward) later traverses in reverse.
pub struct Scalar {
    pub(crate) data: Rc<RefCell<ScalarData>>,
}

impl Scalar {
    /// Creates a leaf node (an input or a constant) holding `data`.
    pub fn new(data: f64) -> Self {
        Scalar {
            data: Rc::new(RefCell::new(ScalarData::new_leaf(data))),
        }
    }

    /// Creates a node produced by an operation, wiring in its propagation rule.
    pub(crate) fn from_op(data: f64, op: Op, grad_fn: Rc<dyn BackwardOp>) -> Self {
        Scalar {
            data: Rc::new(RefCell::new(ScalarData {
                data,
                grad: 0.0,
                grad_fn: Some(grad_fn),
                op,
            })),
        }
    }

    /// Returns the forward value of the node.
    pub fn data(&self) -> f64 {
        self.data.borrow().data
    }

    /// Overwrites the forward value of the node.
    ///
    /// Intended for optimizers applying `data -= lr * grad` style updates to
    /// parameters between passes; mutating an interior node of a live graph
    /// does not re-run the forward computation of its consumers.
    pub fn set_data(&self, value: f64) {
        self.data.borrow_mut().data = value;
    }

    /// Returns the accumulated gradient of the node.
    pub fn grad(&self) -> f64 {
        self.data.borrow().grad
    }

    /// Returns the tag of the operation that created this node
    /// ([`Op::Leaf`] for inputs and constants).
    pub fn op(&self) -> Op {
        self.data.borrow().op
    }

    /// Whether this node is a leaf (no predecessors).
    pub fn is_leaf(&self) -> bool {
        self.data.borrow().grad_fn.is_none()
    }

    /// Returns handles to the operand nodes that produced this node.
    ///
    /// Empty for leaves. The set is fixed at construction and never mutated;
    /// reading it (e.g. from a graph renderer) does not touch the graph.
    pub fn predecessors(&self) -> Vec<Scalar> {
        self.data
            .borrow()
            .grad_fn
            .as_ref()
            .map(|grad_fn| grad_fn.inputs())
            .unwrap_or_default()
    }

    /// Node identity: whether two handles point at the same graph node.
    ///
    /// `Scalar` deliberately does not implement `PartialEq` — comparing
    /// forward values would conflate distinct nodes holding equal data.
    pub fn ptr_eq(&self, other: &Scalar) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    /// Stable address of the shared node, used as a graph key.
    pub(crate) fn as_ptr(&self) -> *const RefCell<ScalarData> {
        Rc::as_ptr(&self.data)
    }
}

impl From<f64> for Scalar {
    /// Lifts a plain number to a constant leaf node.
    fn from(data: f64) -> Self {
        Scalar::new(data)
    }
}

// Manual implementation of Clone: clones the handle, not the node.
impl Clone for Scalar {
    fn clone(&self) -> Self {
        Scalar {
            data: Rc::clone(&self.data),
        }
    }
}

// --- Tests ---
