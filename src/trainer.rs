use crate::costs::Cost;
use crate::error::{NetworkError, Result};
use crate::neural_network::NeuralNetwork;

use log::info;
use ndarray::Array2;

/// To practically implement optional setting of training hyperparameters.
pub struct Trainer<'a> {
    pub training_data: &'a Array2<f32>,
    pub training_labels: &'a Array2<f32>,
    pub cost: Cost,
    pub learning_rate: f32,
    // Number of full forward-backward-update passes over the batch.
    pub epochs: u32,
    // Epochs between loss reports, or `None` to train silently.
    pub log_interval: Option<u32>,
    pub neural_network: &'a mut NeuralNetwork,
}
impl<'a> Trainer<'a> {
    /// Sets `cost`.
    ///
    /// `cost` determines cost function of network.
    pub fn cost(&mut self, cost: Cost) -> &mut Trainer<'a> {
        self.cost = cost;
        return self;
    }
    /// Sets `learning_rate`.
    pub fn learning_rate(&mut self, learning_rate: f32) -> &mut Trainer<'a> {
        self.learning_rate = learning_rate;
        return self;
    }
    /// Sets `epochs`.
    ///
    /// `epochs` sets how many forward-backward-update cycles to run; there
    /// is no other stopping condition.
    pub fn epochs(&mut self, epochs: u32) -> &mut Trainer<'a> {
        self.epochs = epochs;
        return self;
    }
    /// Sets `log_interval`.
    ///
    /// `log_interval` sets the number of epochs between loss reports.
    pub fn log_interval(&mut self, log_interval: u32) -> &mut Trainer<'a> {
        self.log_interval = Some(log_interval);
        return self;
    }
    /// Disables loss reporting.
    pub fn silent(&mut self) -> &mut Trainer<'a> {
        self.log_interval = None;
        return self;
    }
    /// Begins training.
    ///
    /// Runs forward, loss, backward and update once per epoch, every epoch,
    /// unconditionally. Loss is recorded for reporting only and never
    /// affects the optimization trajectory.
    pub fn go(&mut self) -> Result<()> {
        self.check_dataset()?;

        for epoch in 0..self.epochs {
            // Forward propagation
            let (prediction, cache) = self.neural_network.forward(self.training_data)?;

            // Compute loss
            let loss = self.cost.run(self.training_labels, &prediction);

            // Backward propagation
            let gradients =
                self.neural_network
                    .backward(self.training_labels, &cache, &self.cost)?;

            // Update parameters
            self.neural_network.update(&gradients, self.learning_rate);

            // Report loss at the configured cadence.
            if let Some(interval) = self.log_interval {
                if epoch % interval.max(1) == 0 {
                    info!("Epoch {epoch} - Loss: {loss}");
                }
            }
        }
        return Ok(());
    }
    // Checks the dataset fits the network, before any epoch runs.
    fn check_dataset(&self) -> Result<()> {
        // Checks data matches labels.
        if self.training_data.ncols() != self.training_labels.ncols() {
            return Err(NetworkError::ShapeMismatch {
                what: "label columns",
                got: self.training_labels.ncols(),
                expected: self.training_data.ncols(),
            });
        }
        // Checks all examples fit the neural network.
        if self.training_data.nrows() != self.neural_network.inputs() {
            return Err(NetworkError::ShapeMismatch {
                what: "input features",
                got: self.training_data.nrows(),
                expected: self.neural_network.inputs(),
            });
        }
        // Checks labels fit the output layer.
        if self.training_labels.nrows() != self.neural_network.outputs() {
            return Err(NetworkError::ShapeMismatch {
                what: "label rows",
                got: self.training_labels.nrows(),
                expected: self.neural_network.outputs(),
            });
        }
        return Ok(());
    }
}
