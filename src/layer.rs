use crate::activation::Activation;

use ndarray::{Array2, Axis};
use ndarray_rand::rand_distr::StandardNormal;
use ndarray_rand::RandomExt;
use rand::Rng;

// Scale applied to normally distributed initial weights, keeping early
// activations inside the near-linear region of the nonlinearities.
const WEIGHT_SCALE: f32 = 0.01;

/// A dense layer.
pub struct DenseLayer {
    pub activation: Activation,
    pub biases: Array2<f32>,
    pub weights: Array2<f32>,
}
impl DenseLayer {
    // Constructs new `DenseLayer` with small random weights and zero biases.
    pub fn new<R: Rng + ?Sized>(
        from: usize,
        size: usize,
        activation: Activation,
        rng: &mut R,
    ) -> DenseLayer {
        return DenseLayer {
            activation,
            biases: Array2::zeros((size, 1)),
            weights: Array2::<f32>::random_using((size, from), StandardNormal, rng) * WEIGHT_SCALE,
        };
    }
    // Constructs new `DenseLayer` using a given value for all weights and biases.
    pub fn new_constant(from: usize, size: usize, activation: Activation, val: f32) -> DenseLayer {
        return DenseLayer {
            activation,
            biases: Array2::from_elem((size, 1), val),
            weights: Array2::from_elem((size, from), val),
        };
    }
    /// Number of units in this layer.
    pub fn size(&self) -> usize {
        self.weights.len_of(Axis(0))
    }
    /// Number of inputs this layer expects.
    pub fn inputs(&self) -> usize {
        self.weights.len_of(Axis(1))
    }
    // Forward propagates.
    //
    // Returns (a, z).
    pub fn forepropagate(&self, a: &Array2<f32>) -> (Array2<f32>, Array2<f32>) {
        // z (bias column broadcast across examples)
        let weighted_input = self.weights.dot(a) + &self.biases;

        // a
        let activation = self.activation.run(&weighted_input);

        return (activation, weighted_input);
    }
}
