use std::fmt;

/// The result type used across the library.
pub type Result<T> = std::result::Result<T, NetworkError>;

/// Errors produced when a network is constructed or run with inconsistent
/// inputs. All of them are deterministic caller errors, none are retryable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// The layer spec is malformed, or the activation list does not cover
    /// every trainable layer.
    InvalidSpec(String),
    /// Matrix dimensions are incompatible between consecutive layers, or
    /// between a dataset and the network.
    ShapeMismatch {
        /// Which dimension was wrong (e.g. "layer input", "label rows").
        what: &'static str,
        /// Observed value.
        got: usize,
        /// Expected value.
        expected: usize,
    },
    /// The backward pass was handed a cache that is absent or inconsistent
    /// with this network's architecture for the given layer.
    CacheMiss {
        /// 1-based index of the first layer with a missing or mismatched
        /// cache entry.
        layer: usize,
    },
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::InvalidSpec(msg) => write!(f, "invalid layer spec: {msg}"),
            NetworkError::ShapeMismatch {
                what,
                got,
                expected,
            } => {
                write!(f, "shape mismatch for {what}: got {got}, expected {expected}")
            }
            NetworkError::CacheMiss { layer } => {
                write!(f, "forward cache is missing or stale for layer {layer}")
            }
        }
    }
}

impl std::error::Error for NetworkError {}
