use crate::activation::Activation;
use crate::costs::Cost;
use crate::error::{NetworkError, Result};
use crate::layer::DenseLayer;
use crate::trainer::Trainer;

use itertools::izip;
use ndarray::{Array2, Axis};
use rand::Rng;

// Default learning rate.
const DEFAULT_LEARNING_RATE: f32 = 0.01;
// Default number of epochs to train for.
const DEFAULT_EPOCHS: u32 = 1000;
// Default interval in epochs between loss reports.
const DEFAULT_LOG_INTERVAL: u32 = 100;

/// Intermediate values of one forward pass.
///
/// Holds the activation of every layer (index 0 being the input batch
/// itself) and the weighted input of every trainable layer. Produced by
/// [`NeuralNetwork::forward`], consumed read-only by
/// [`NeuralNetwork::backward`]; a cache is only valid for the parameters
/// that produced it.
pub struct Cache {
    // A_0..A_L
    activations: Vec<Array2<f32>>,
    // Z_1..Z_L
    weighted_inputs: Vec<Array2<f32>>,
}
impl Cache {
    /// Activation of the output layer.
    pub fn output(&self) -> &Array2<f32> {
        // A forward pass always pushes the input batch first.
        self.activations.last().expect("cache holds the input batch")
    }
}

/// Gradients of the cost w.r.t. one layer's parameters.
pub struct LayerGradient {
    /// ∂C/∂w, same shape as the layer's weights.
    pub weights: Array2<f32>,
    /// ∂C/∂b, same shape as the layer's biases.
    pub biases: Array2<f32>,
}

/// The fundamental neural network struct.
///
/// All other types are ancillary to this structure.
pub struct NeuralNetwork {
    // Inputs to network.
    inputs: usize,
    // Dense layers in order, each owning its weights, biases and activation.
    layers: Vec<DenseLayer>,
}
impl NeuralNetwork {
    /// Constructs network from a layer spec and one activation per layer.
    ///
    /// `layer_spec[0]` is the input feature count, every following entry the
    /// unit count of a layer. Weights start as small random values, biases
    /// as zero.
    /// ```
    /// use feedforward::{Activation, NeuralNetwork};
    ///
    /// // Net (2 -ReLU-> 3 -Sigmoid-> 1)
    /// let net = NeuralNetwork::new(&[2, 3, 1], &[Activation::ReLU, Activation::Sigmoid]).unwrap();
    /// assert_eq!(net.depth(), 2);
    /// ```
    pub fn new(layer_spec: &[usize], activations: &[Activation]) -> Result<NeuralNetwork> {
        return NeuralNetwork::new_using(layer_spec, activations, &mut rand::rng());
    }
    /// Constructs network of given layers drawing initial weights from a
    /// given rng, for deterministic construction.
    pub fn new_using<R: Rng + ?Sized>(
        layer_spec: &[usize],
        activations: &[Activation],
        rng: &mut R,
    ) -> Result<NeuralNetwork> {
        NeuralNetwork::spec_checks(layer_spec, activations)?;

        let layers = izip!(&layer_spec[..layer_spec.len() - 1], &layer_spec[1..], activations)
            .map(|(&from, &size, &activation)| DenseLayer::new(from, size, activation, &mut *rng))
            .collect();

        return Ok(NeuralNetwork {
            inputs: layer_spec[0],
            layers,
        });
    }
    /// Constructs network of given layers with all weights and biases set to
    /// a given value.
    pub fn new_constant(
        layer_spec: &[usize],
        activations: &[Activation],
        val: f32,
    ) -> Result<NeuralNetwork> {
        NeuralNetwork::spec_checks(layer_spec, activations)?;

        let layers = izip!(&layer_spec[..layer_spec.len() - 1], &layer_spec[1..], activations)
            .map(|(&from, &size, &activation)| DenseLayer::new_constant(from, size, activation, val))
            .collect();

        return Ok(NeuralNetwork {
            inputs: layer_spec[0],
            layers,
        });
    }
    // Checks the layer spec describes at least one layer of positive size
    // and that the activation list covers every layer.
    fn spec_checks(layer_spec: &[usize], activations: &[Activation]) -> Result<()> {
        if layer_spec.len() < 2 {
            return Err(NetworkError::InvalidSpec(format!(
                "need an input size and at least 1 layer, got {} entries",
                layer_spec.len()
            )));
        }
        if let Some(position) = layer_spec.iter().position(|&size| size == 0) {
            return Err(NetworkError::InvalidSpec(format!(
                "all layer sizes must be >0, entry {position} is 0"
            )));
        }
        let depth = layer_spec.len() - 1;
        if activations.len() != depth {
            return Err(NetworkError::InvalidSpec(format!(
                "{} activations given for {depth} layers",
                activations.len()
            )));
        }
        return Ok(());
    }

    /// Number of input features the network expects.
    pub fn inputs(&self) -> usize {
        self.inputs
    }
    /// Number of output units.
    pub fn outputs(&self) -> usize {
        // Construction guarantees at least one layer.
        self.layers.last().expect("network has layers").size()
    }
    /// Number of trainable layers.
    pub fn depth(&self) -> usize {
        self.layers.len()
    }
    /// The layers in order.
    pub fn layers(&self) -> &[DenseLayer] {
        &self.layers
    }
    /// Mutable access to the layers, for callers adjusting parameters by
    /// hand.
    pub fn layers_mut(&mut self) -> &mut [DenseLayer] {
        &mut self.layers
    }

    /// Runs a batch of examples through the network.
    ///
    /// Columns of `input` are examples. Returns the output activation along
    /// with the cache of intermediate values [`backward`] consumes.
    /// Parameters are read-only here; the same parameters and input always
    /// produce the same output.
    ///
    /// [`backward`]: NeuralNetwork::backward
    pub fn forward(&self, input: &Array2<f32>) -> Result<(Array2<f32>, Cache)> {
        let mut cache = Cache {
            activations: Vec::with_capacity(self.layers.len() + 1),
            weighted_inputs: Vec::with_capacity(self.layers.len()),
        };

        // Sets input layer activation.
        let mut activation = input.clone();
        for layer in self.layers.iter() {
            if activation.nrows() != layer.inputs() {
                return Err(NetworkError::ShapeMismatch {
                    what: "layer input",
                    got: activation.nrows(),
                    expected: layer.inputs(),
                });
            }
            let (a, z) = layer.forepropagate(&activation);
            cache.activations.push(activation);
            cache.weighted_inputs.push(z);
            activation = a;
        }
        cache.activations.push(activation.clone());

        return Ok((activation, cache));
    }
    /// Runs a batch of examples through the network, discarding the cache.
    ///
    /// Returns output activations.
    pub fn run(&self, input: &Array2<f32>) -> Result<Array2<f32>> {
        let (output, _) = self.forward(input)?;
        return Ok(output);
    }

    /// Computes gradients of the cost w.r.t. every weight and bias.
    ///
    /// `cache` must come from a forward pass of this network over the batch
    /// `target` labels. Returns one gradient per layer, first to last.
    pub fn backward(
        &self,
        target: &Array2<f32>,
        cache: &Cache,
        cost: &Cost,
    ) -> Result<Vec<LayerGradient>> {
        self.cache_checks(cache)?;

        let output = cache.output();
        if target.nrows() != output.nrows() {
            return Err(NetworkError::ShapeMismatch {
                what: "label rows",
                got: target.nrows(),
                expected: output.nrows(),
            });
        }
        if target.ncols() != output.ncols() {
            return Err(NetworkError::ShapeMismatch {
                what: "label columns",
                got: target.ncols(),
                expected: output.ncols(),
            });
        }

        // Number of examples in batch.
        let m = target.ncols() as f32;

        let mut gradients: Vec<LayerGradient> = Vec::with_capacity(self.layers.len());

        // ∂C/∂z of the output layer: ∇(a)C chained through its activation.
        // (∂C/∂z = δ)
        let last = self.layers.len() - 1;
        let mut error = cost.derivative(target, output)
            * self.layers[last]
                .activation
                .derivative(&cache.weighted_inputs[last]);

        // Walks layers last to first, emitting each layer's gradients and
        // carrying δ backwards through the weights.
        for (index, layer) in self.layers.iter().enumerate().rev() {
            // a^{l-1}
            let below = &cache.activations[index];

            // ∂C/∂w = (1/m) δ matmul a^T
            let weight_gradient = error.dot(&below.t()) / m;
            // ∂C/∂b = (1/m) δ summed across examples, kept as a column
            let bias_gradient = error.sum_axis(Axis(1)).insert_axis(Axis(1)) / m;
            gradients.push(LayerGradient {
                weights: weight_gradient,
                biases: bias_gradient,
            });

            if index > 0 {
                // ∂C/∂a^{l-1} = w^T matmul δ
                let partial_error = layer.weights.t().dot(&error);
                // ∂C/∂z^{l-1}
                error = partial_error
                    * self.layers[index - 1]
                        .activation
                        .derivative(&cache.weighted_inputs[index - 1]);
            }
        }

        // Walked last to first, returned first to last.
        gradients.reverse();
        return Ok(gradients);
    }
    // Checks the cache holds an entry of the right shape for every layer of
    // this network and nothing more.
    fn cache_checks(&self, cache: &Cache) -> Result<()> {
        let m = cache.activations.first().map_or(0, |a| a.ncols());
        for (index, layer) in self.layers.iter().enumerate() {
            let entries = (
                cache.activations.get(index),
                cache.weighted_inputs.get(index),
                cache.activations.get(index + 1),
            );
            let consistent = match entries {
                (Some(below), Some(z), Some(a)) => {
                    below.nrows() == layer.inputs()
                        && z.nrows() == layer.size()
                        && a.nrows() == layer.size()
                        && below.ncols() == m
                        && z.ncols() == m
                        && a.ncols() == m
                }
                _ => false,
            };
            if !consistent {
                return Err(NetworkError::CacheMiss { layer: index + 1 });
            }
        }
        // A cache from a deeper network is just as stale as a short one.
        if cache.activations.len() != self.layers.len() + 1
            || cache.weighted_inputs.len() != self.layers.len()
        {
            return Err(NetworkError::CacheMiss {
                layer: self.layers.len() + 1,
            });
        }
        return Ok(());
    }

    /// Applies one gradient descent step, in place.
    ///
    /// Shapes never change. Layers without a corresponding gradient entry
    /// are untouched.
    pub fn update(&mut self, gradients: &[LayerGradient], learning_rate: f32) {
        for (layer, gradient) in self.layers.iter_mut().zip(gradients) {
            // = old weights - avg weight errors
            layer.weights.scaled_add(-learning_rate, &gradient.weights);
            // = old biases - avg bias errors
            layer.biases.scaled_add(-learning_rate, &gradient.biases);
        }
    }

    /// Begins setting hyperparameters for training.
    ///
    /// Returns `Trainer` struct used to specify hyperparameters.
    ///
    /// Training a network to learn an OR gate:
    /// ```
    /// use feedforward::{Activation, NeuralNetwork};
    /// use ndarray::array;
    ///
    /// let mut net = NeuralNetwork::new(&[2, 3, 1], &[Activation::ReLU, Activation::Sigmoid]).unwrap();
    /// // Columns are examples.
    /// let data = array![[0f32, 1f32, 0f32, 1f32], [0f32, 0f32, 1f32, 1f32]];
    /// let labels = array![[0f32, 1f32, 1f32, 1f32]];
    ///
    /// net.train(&data, &labels)
    ///     .learning_rate(0.5)
    ///     .epochs(100)
    ///     .silent()
    /// .go().unwrap();
    /// ```
    pub fn train<'a>(
        &'a mut self,
        data: &'a Array2<f32>,
        labels: &'a Array2<f32>,
    ) -> Trainer<'a> {
        return Trainer {
            training_data: data,
            training_labels: labels,
            cost: Cost::default(),
            learning_rate: DEFAULT_LEARNING_RATE,
            epochs: DEFAULT_EPOCHS,
            log_interval: Some(DEFAULT_LOG_INTERVAL),
            neural_network: self,
        };
    }
}
