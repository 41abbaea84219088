use serde::{Serialize, Deserialize};

/// Per-epoch training statistics handed to the progress observer.
///
/// The trainer builds one of these at the end of every completed epoch and
/// passes it to the injected observer callback. Harnesses use it to drive
/// progress output without the trainer owning an output stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Mean squared error over all samples in this epoch.
    pub train_loss: f64,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}
