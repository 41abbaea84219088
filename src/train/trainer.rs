use std::time::Instant;

use crate::error::Result;
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;

/// Trains `network` over `data` for exactly `epochs` full passes and
/// returns the mean squared error of the last completed epoch.
///
/// Samples are visited in the order given, one gradient step per sample.
/// There is no shuffling, no batching and no early stopping; the loop
/// terminates on the epoch count alone.
pub fn train_network(
    network: &mut Network,
    data: &[(Vec<f64>, Vec<f64>)],
    epochs: usize,
) -> Result<f64> {
    train_network_with_observer(network, data, epochs, &mut |_| {})
}

/// Like `train_network`, but calls `observer` once per completed epoch
/// with that epoch's statistics. The observer is the only progress
/// channel; the trainer itself never writes to any output stream.
pub fn train_network_with_observer(
    network: &mut Network,
    data: &[(Vec<f64>, Vec<f64>)],
    epochs: usize,
    observer: &mut dyn FnMut(&EpochStats),
) -> Result<f64> {
    let mut last_train_loss = 0.0;

    for epoch in 1..=epochs {
        let t_start = Instant::now();
        let mut total_loss = 0.0;

        for (input, expected) in data {
            let output = network.train_step(input, expected)?;
            total_loss += squared_error(&output, expected);
        }

        let train_loss = if data.is_empty() {
            0.0
        } else {
            total_loss / data.len() as f64
        };
        last_train_loss = train_loss;

        observer(&EpochStats {
            epoch,
            total_epochs: epochs,
            train_loss,
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        });
    }

    Ok(last_train_loss)
}

/// Mean over outputs of (predicted - expected)², taken from the step's
/// pre-update output.
fn squared_error(predicted: &[f64], expected: &[f64]) -> f64 {
    let n = predicted.len() as f64;
    predicted
        .iter()
        .zip(expected.iter())
        .map(|(a, b)| (a - b).powi(2))
        .sum::<f64>()
        / n
}
