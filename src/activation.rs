use ndarray::Array2;

/// Defines activations of layers in neural network.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// Sigmoid activation function.
    ///
    /// $ A(z)=\frac{1}{1+e^-z} $
    Sigmoid,
    /// ReLU activation function.
    ///
    /// $ A(z)=max(z,0) $
    ReLU,
}
impl Activation {
    /// Computes activations given weighted inputs.
    pub fn run(&self, z: &Array2<f32>) -> Array2<f32> {
        return match self {
            Self::Sigmoid => z.mapv(sigmoid),
            Self::ReLU => z.mapv(|v| v.max(0f32)),
        };
    }
    /// Derivative wrt layer input (∂a/∂z).
    pub fn derivative(&self, z: &Array2<f32>) -> Array2<f32> {
        return match self {
            Self::Sigmoid => sigmoid_derivative(z),
            Self::ReLU => relu_derivative(z),
        };

        // Derivative of sigmoid
        // s' = s(1-s)
        fn sigmoid_derivative(z: &Array2<f32>) -> Array2<f32> {
            let s = z.mapv(sigmoid);
            return s.clone() * (1f32 - s);
        }
        // Derivative of ReLU
        // if z>0 1 else 0 (taken as 0 at z=0)
        fn relu_derivative(z: &Array2<f32>) -> Array2<f32> {
            return z.mapv(|v| if v > 0f32 { 1f32 } else { 0f32 });
        }
    }
}
fn sigmoid(z: f32) -> f32 {
    1f32 / (1f32 + (-z).exp())
}
