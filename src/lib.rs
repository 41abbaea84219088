pub mod math;
pub mod activation;
pub mod error;
pub mod network;
pub mod train;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::{sigmoid, sigmoid_derivative};
pub use error::{NetworkError, Result};
pub use network::network::{Network, DEFAULT_LEARNING_RATE};
pub use network::weights::Weights;
pub use train::epoch_stats::EpochStats;
pub use train::trainer::{train_network, train_network_with_observer};
