use crate::scalar::Scalar;
use crate::scalar_data::ScalarData;
use std::cell::RefCell;
use std::collections::HashSet;

/// Builds a deterministic topological sort of the computation graph:
/// depth-first post-order, so a node is appended only after all of its
/// predecessors, and each node appears exactly once.
///
/// Visited-tracking uses a `HashSet` keyed on the node's shared-pointer
/// address, which is stable for the lifetime of the pass.
///
/// The traversal is iterative with an explicit stack: stack usage stays
/// bounded no matter how deep or wide the graph is. Each stack entry carries
/// an `expanded` flag — a node is first expanded (its predecessors pushed),
/// then appended when popped a second time.
pub(crate) fn topo_sort(root: &Scalar) -> Vec<Scalar> {
    let mut sorted: Vec<Scalar> = Vec::new();
    let mut visited: HashSet<*const RefCell<ScalarData>> = HashSet::new();
    let mut stack: Vec<(Scalar, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted.push(node);
            continue;
        }
        if !visited.insert(node.as_ptr()) {
            continue; // already reached through a sibling path
        }
        stack.push((node.clone(), true));
        // Reversed so the first operand is explored first.
        for predecessor in node.predecessors().into_iter().rev() {
            if !visited.contains(&predecessor.as_ptr()) {
                stack.push((predecessor, false));
            }
        }
    }

    sorted
}

// --- Tests ---
