// Neurons and the containers built from them.

pub mod activation;
pub mod layer;
pub mod mlp;
pub mod neuron;

pub use activation::Activation;
pub use layer::Layer;
pub use mlp::Mlp;
pub use neuron::Neuron;
