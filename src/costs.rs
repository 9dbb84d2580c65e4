use ndarray::Array2;

/// Defines cost function of a neural network.
#[derive(Clone, Copy, Debug)]
pub enum Cost {
    /// Mean squared error cost function.
    ///
    /// $ C(y,a)=\frac{1}{n}\sum_{x} (y(x)-a(x))^2 $
    MeanSquaredError,
}
impl Cost {
    /// Runs cost function.
    ///
    /// y: Target out, a: Actual out.
    pub fn run(&self, y: &Array2<f32>, a: &Array2<f32>) -> f32 {
        return match self {
            Self::MeanSquaredError => mean_squared_error(y, a),
        };
        // Mean over every entry of the squared error.
        fn mean_squared_error(y: &Array2<f32>, a: &Array2<f32>) -> f32 {
            (y - a).mapv(|e| e * e).mean().unwrap_or_default()
        }
    }
    /// Derivative w.r.t. layer output (∂C/∂a).
    ///
    /// y: Target out, a: Actual out.
    pub fn derivative(&self, y: &Array2<f32>, a: &Array2<f32>) -> Array2<f32> {
        return match self {
            // a - y. The 1/m normalisation lives in the backward pass and the
            // conventional factor of 2 is folded into the learning rate.
            Self::MeanSquaredError => a - y,
        };
    }
}
impl Default for Cost {
    fn default() -> Self {
        Cost::MeanSquaredError
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ndarray::array;

    #[test]
    fn mean_squared_error_run() {
        let y = array![[1f32, 0f32], [0f32, 1f32]];
        let a = array![[0.5f32, 0f32], [0f32, 0f32]];
        // ((0.5)^2 + 0 + 0 + 1) / 4
        assert!((Cost::MeanSquaredError.run(&y, &a) - 0.3125).abs() < 1e-6);
    }
    #[test]
    fn mean_squared_error_run_on_identical_batches_is_zero() {
        let y = array![[0.3f32, 0.7f32]];
        assert_eq!(Cost::MeanSquaredError.run(&y, &y), 0f32);
    }
    #[test]
    fn mean_squared_error_derivative_has_no_factor_of_two() {
        let y = array![[1f32], [0f32]];
        let a = array![[0.25f32], [0.75f32]];
        assert_eq!(
            Cost::MeanSquaredError.derivative(&y, &a),
            array![[-0.75f32], [0.75f32]]
        );
    }
}
