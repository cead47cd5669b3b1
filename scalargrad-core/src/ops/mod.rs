//! # Scalar Operations Module (`ops`)
//!
//! Central hub for the differentiable operations of the engine. Operations
//! are grouped into submodules by kind.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** each operation has a core function (`add_op`,
//!   `pow_op`, ...) that computes the forward value and wires the backward
//!   rule into the output node. The `std::ops` operator impls and the
//!   `Scalar` convenience methods all funnel through these.
//! - **`Backward` Structs:** each operation has a struct (`AddBackward`,
//!   `PowBackward`, ...) implementing
//!   [`BackwardOp`](crate::autograd::BackwardOp), holding handles to the
//!   operands captured during the forward pass.
//! - **Coercion:** every binary operator accepts a plain `f64` on either
//!   side, lifting it to a constant leaf node, so reflected forms like
//!   `2.0 - &x` and `2.0 / &x` build the same kind of graph as their
//!   node-node counterparts.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow.
//! - [`activation`]: relu.

use std::fmt;

// Declare operation submodules
pub mod activation;
pub mod arithmetic;

/// Tag naming the operation that created a node.
///
/// Stored on every node so external tooling (e.g. a graph renderer) can
/// label it without inspecting the propagation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// An input or constant: no predecessors.
    Leaf,
    Add,
    Sub,
    Mul,
    Div,
    Neg,
    Pow,
    Relu,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Op::Leaf => "",
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Neg => "neg",
            Op::Pow => "pow",
            Op::Relu => "relu",
        };
        write!(f, "{}", label)
    }
}
