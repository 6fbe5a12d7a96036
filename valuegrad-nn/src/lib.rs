//! Neurons, layers and multi-layer perceptrons over `valuegrad-core` scalars.
//!
//! Every parameter is a leaf [`Value`](valuegrad_core::Value) of a caller-owned
//! [`Graph`](valuegrad_core::Graph). A training step builds the forward
//! expression on that graph, calls `backward` on the loss, lets an
//! [`Optimizer`] update the leaves and then rewinds the graph to a checkpoint
//! taken after the parameters were created.

pub mod error;
pub mod init;
pub mod layers;
pub mod losses;
pub mod module;
pub mod optim;

pub use error::NnError;
pub use init::Init;
pub use layers::{Activation, Layer, Mlp, Neuron};
pub use losses::{mse_loss, Reduction};
pub use module::Module;
pub use optim::{Optimizer, Sgd};
