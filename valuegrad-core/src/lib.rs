//! Scalar reverse-mode automatic differentiation.
//!
//! Every arithmetic or activation call on a [`Value`] appends a node to a
//! [`Graph`] arena, recording its operands and the local-gradient rule of the
//! operation. [`Value::backward`] then walks the nodes reachable from a root in
//! reverse topological order and accumulates `∂root/∂node` into every node's
//! gradient.
//!
//! ```
//! use valuegrad_core::Graph;
//!
//! let graph = Graph::new();
//! let a = graph.leaf(2.0);
//! let b = graph.leaf(-3.0);
//! let c = graph.leaf(10.0);
//! let d = &a * &b + &c;
//! d.backward();
//! assert_eq!(d.data(), 4.0);
//! assert_eq!(a.grad(), -3.0);
//! assert_eq!(b.grad(), 2.0);
//! assert_eq!(c.grad(), 1.0);
//! ```

pub mod autograd;
pub mod error;
pub mod node_data;
pub mod ops;
pub mod utils;
pub mod value;
pub mod viz;

pub use autograd::graph::{Checkpoint, Graph, NodeId};
pub use error::AutogradError;
pub use ops::Operand;
pub use value::Value;
