pub mod trainer;
pub mod epoch_stats;

pub use trainer::{train_network, train_network_with_observer};
pub use epoch_stats::EpochStats;
