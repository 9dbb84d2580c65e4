//! Trains a small network to classify points by a linear boundary.
//!
//! 2 uniform features per example, label 1 when the feature sum exceeds 1.
//! Run with `RUST_LOG=info` to see the periodic loss reports.

use feedforward::{Activation, NeuralNetwork};
use ndarray::Array2;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn main() -> feedforward::Result<()> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(42);

    // 2 features, 500 samples, columns are examples.
    let data = Array2::from_shape_fn((2, 500), |_| rng.random::<f32>());
    // Simple linear boundary for classification.
    let labels = Array2::from_shape_fn((1, 500), |(_, j)| {
        if data[[0, j]] + data[[1, j]] > 1f32 {
            1f32
        } else {
            0f32
        }
    });

    // Net (2 -ReLU-> 4 -Sigmoid-> 1)
    let mut net = NeuralNetwork::new_using(
        &[2, 4, 1],
        &[Activation::ReLU, Activation::Sigmoid],
        &mut rng,
    )?;

    net.train(&data, &labels)
        .learning_rate(0.01f32)
        .epochs(1000)
        .go()?;

    // Thresholded predictions against the true labels.
    let prediction = net.run(&data)?;
    let correct = prediction
        .iter()
        .zip(labels.iter())
        .filter(|(p, y)| (**p > 0.5f32) == (**y > 0.5f32))
        .count();
    println!(
        "Training accuracy: {:.2}%",
        100f32 * correct as f32 / labels.len() as f32
    );

    return Ok(());
}
