use crate::autograd::graph::topological_sort;
use crate::error::AutogradError;
use crate::value::Value;

impl Value {
    /// The accumulated gradient ∂root/∂self of the last backward pass(es) that
    /// reached this node. `0.0` means "not computed yet", not "mathematically zero".
    pub fn grad(&self) -> f64 {
        self.try_read(|node| node.grad)
            .unwrap_or_else(|e| panic!("{}", e))
    }

    /// Non-panicking variant of [`Value::grad`].
    pub fn try_grad(&self) -> Result<f64, AutogradError> {
        self.try_read(|node| node.grad)
    }

    /// Overwrites the gradient accumulator.
    pub fn set_grad(&self, grad: f64) {
        self.try_write(|node| node.grad = grad)
            .unwrap_or_else(|e| panic!("{}", e))
    }

    /// Resets the gradient accumulator to zero, typically before a new backward pass.
    pub fn zero_grad(&self) {
        self.set_grad(0.0)
    }

    /// Performs the backward pass starting from this node.
    ///
    /// Computes ∂self/∂n for every node `n` reachable from `self` through operands
    /// (including `self`) and **adds** it to `n`'s gradient. Nodes that are not
    /// reachable keep their gradient. Call `zero_grad` on the nodes you care about
    /// first if you want a fresh computation.
    ///
    /// The gradient of the root itself is set (not added) to `1.0`.
    ///
    /// # Panics
    /// Panics if the node was discarded by `Graph::rewind`; see [`Value::try_backward`].
    pub fn backward(&self) {
        self.try_backward().unwrap_or_else(|e| panic!("{}", e))
    }

    /// Non-panicking variant of [`Value::backward`].
    pub fn try_backward(&self) -> Result<(), AutogradError> {
        let mut data = self.graph.borrow_mut();
        data.node(self.id, self.epoch)?;

        let sorted_nodes = topological_sort(&data, self.id);
        log::trace!(
            "backward from node {}: {} reachable nodes",
            self.id,
            sorted_nodes.len()
        );

        data.nodes[self.id.index()].grad = 1.0;

        // Reverse post-order: a node's rule runs only after every consumer has
        // contributed to its gradient.
        for node_id in sorted_nodes.iter().rev() {
            let node = &data.nodes[node_id.index()];
            let operands = node.operands;
            let contributions = node.backward_op.backward(node.grad);
            for (operand, contribution) in operands.as_slice().iter().zip(contributions) {
                data.nodes[operand.index()].grad += contribution;
            }
        }
        Ok(())
    }

    /// Nodes reachable from this one, each listed after all of its operands.
    ///
    /// This is the order the backward pass walks in reverse.
    pub fn topological_order(&self) -> Vec<Value> {
        let data = self.graph.borrow();
        if let Err(e) = data.node(self.id, self.epoch) {
            panic!("{}", e);
        }
        topological_sort(&data, self.id)
            .into_iter()
            .map(|id| Value {
                graph: self.graph.clone(),
                id,
                epoch: data.nodes[id.index()].epoch,
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
