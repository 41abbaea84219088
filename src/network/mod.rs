pub mod model_file;
pub mod network;
pub mod weights;

pub use network::{Network, DEFAULT_LEARNING_RATE};
pub use weights::Weights;
