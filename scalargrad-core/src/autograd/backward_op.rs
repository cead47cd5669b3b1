use crate::scalar::Scalar;
use std::fmt::Debug;

/// Defines the interface for the backward pass of a differentiable operation.
///
/// Any operation that creates a non-leaf [`Scalar`] stores an implementation
/// of this trait in the output node's `grad_fn` field. During a
/// [`backward`](Scalar::backward) call it is invoked once, after every
/// consumer of the output has deposited its contribution, to propagate the
/// output's gradient to the operands according to the chain rule.
///
/// Implementations hold **strong** handles to their operands: predecessor
/// edges only ever point from an output back to the inputs that existed
/// before it, so the reference graph is acyclic and plain reference counting
/// reclaims it.
pub trait BackwardOp: Debug {
    /// Propagates the gradient flowing into the output of this operation
    /// (`upstream` = dRoot/dOutput) into the operands' accumulators.
    ///
    /// Each operand receives `dRoot/dOutput * dOutput/dOperand`, added via
    /// `+=` so contributions from sibling consumers are summed, never
    /// overwritten.
    fn backward(&self, upstream: f64);

    /// Returns handles to the operand nodes used in the forward pass.
    ///
    /// This is what links an output node back to its predecessors when the
    /// graph is traversed or rendered. The order matches the operands'
    /// forward-pass order.
    fn inputs(&self) -> Vec<Scalar>;
}
