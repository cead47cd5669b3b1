// src/scalar/autograd_methods.rs

use crate::autograd::graph::topo_sort;
use crate::scalar::Scalar;

impl Scalar {
    /// Computes the gradients of this node w.r.t. every reachable predecessor.
    ///
    /// Seeds `self.grad = 1`, then walks the reverse topological order of the
    /// sub-graph rooted here, invoking each node's propagation rule so that
    /// every predecessor accumulates its contribution via `+=`.
    ///
    /// Gradients are **never reset** by this method: a second `backward()`
    /// call (on this or a related root) adds on top of whatever the
    /// accumulators already hold. Callers running an optimization loop reset
    /// between steps with [`zero_grad`](Scalar::zero_grad) or
    /// [`Module::zero_grad`](crate::nn::Module::zero_grad).
    ///
    /// The traversal assumes the predecessor graph is a DAG; cycles are a
    /// caller error and are not detected.
    pub fn backward(&self) {
        if self.is_leaf() {
            log::debug!("backward() called on a leaf node. Nothing to propagate.");
        }
        let order = topo_sort(self);
        log::trace!("backward pass over {} node(s)", order.len());

        self.data.borrow_mut().grad = 1.0; // seed dRoot/dRoot

        for node in order.iter().rev() {
            let (grad, grad_fn) = {
                let node_data = node.data.borrow();
                (node_data.grad, node_data.grad_fn.clone())
            };
            if let Some(grad_fn) = grad_fn {
                grad_fn.backward(grad);
            }
        }
    }

    /// Resets the gradient accumulator of this node to 0.
    pub fn zero_grad(&self) {
        self.data.borrow_mut().grad = 0.0;
    }

    /// Enumerates every node reachable from this one via predecessor edges,
    /// in deterministic topological order (predecessors before consumers,
    /// `self` last).
    ///
    /// This is the read-only traversal a graph renderer needs: each returned
    /// handle exposes `data`/`grad`/`op`/`predecessors` without mutating the
    /// graph.
    pub fn reachable(&self) -> Vec<Scalar> {
        topo_sort(self)
    }
}

// --- Tests ---
