//! A minimal dense feedforward neural network engine.
//!
//! Batches are `ndarray` matrices with one example per column. Networks are
//! built from a layer spec plus one activation per layer, trained by plain
//! full-batch gradient descent with exact analytic gradients.

pub mod activation;
pub mod costs;
pub mod error;
pub mod layer;
pub mod neural_network; // Container neural network structure and primary user facing functionality
pub mod trainer;

pub use activation::Activation;
pub use costs::Cost;
pub use error::{NetworkError, Result};
pub use layer::DenseLayer;
pub use neural_network::{Cache, LayerGradient, NeuralNetwork};
pub use trainer::Trainer;
