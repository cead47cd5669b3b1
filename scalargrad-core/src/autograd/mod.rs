//! Backward-pass machinery: the [`BackwardOp`] rule trait, the topological
//! ordering of the graph, and gradient accumulation.

pub mod backward_op;
pub(crate) mod graph;

pub use backward_op::BackwardOp;

use crate::scalar::Scalar;

/// Adds `contribution` into the gradient accumulator of `node`.
///
/// Every propagation rule funnels through here so the accumulation semantics
/// (always `+=`, never overwrite) live in one place. A node consumed twice by
/// the same operation (e.g. `a + a`) simply accumulates twice.
pub(crate) fn accumulate_grad(node: &Scalar, contribution: f64) {
    node.data.borrow_mut().grad += contribution;
}
