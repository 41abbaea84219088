use rand::prelude::*;

use crate::activation::{sigmoid, sigmoid_derivative};
use crate::error::{NetworkError, Result};
use crate::math::matrix::Matrix;
use crate::network::model_file;
use crate::network::weights::Weights;
use crate::train::epoch_stats::EpochStats;
use crate::train::trainer;

/// Learning rate assumed when a model file predates the `learningRate`
/// field. This is a documented default, not a value recovered from the
/// file.
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;

/// Activations captured by the most recent forward pass, all in
/// post-sigmoid space. Consumed by `backpropagate`; each cache is good for
/// exactly one weight update.
#[derive(Debug, Clone)]
struct ForwardCache {
    input: Vec<f64>,
    hidden: Vec<f64>,
    output: Vec<f64>,
}

/// A fixed input → hidden → output network with sigmoid activations at
/// both layers and no bias terms, trained by per-sample gradient descent.
///
/// Not internally synchronized: one instance must not be driven from
/// multiple threads at once.
#[derive(Debug)]
pub struct Network {
    input_size: usize,
    hidden_size: usize,
    output_size: usize,
    learning_rate: f64,
    weights: Weights,
    cache: Option<ForwardCache>,
}

impl Network {
    /// Builds a network with freshly initialized fan-scaled Gaussian
    /// weights drawn from the thread-local RNG.
    pub fn new(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        learning_rate: f64,
    ) -> Result<Network> {
        Network::with_rng(
            input_size,
            hidden_size,
            output_size,
            learning_rate,
            &mut rand::thread_rng(),
        )
    }

    /// Same as `new`, but samples the initial weights from the given RNG.
    /// A seeded `StdRng` yields a reproducible network.
    pub fn with_rng<R: Rng>(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        learning_rate: f64,
        rng: &mut R,
    ) -> Result<Network> {
        if input_size == 0 || hidden_size == 0 || output_size == 0 {
            return Err(NetworkError::Shape(format!(
                "layer sizes must be positive, got {input_size}x{hidden_size}x{output_size}"
            )));
        }

        let weights = Weights {
            input_to_hidden: Matrix::fan_scaled(input_size, hidden_size, rng),
            hidden_to_output: Matrix::fan_scaled(hidden_size, output_size, rng),
        };

        Ok(Network {
            input_size,
            hidden_size,
            output_size,
            learning_rate,
            weights,
            cache: None,
        })
    }

    /// Rebuilds a trainable network around previously trained weights.
    /// Layer sizes are recovered from the matrix shapes; the learning rate
    /// is not part of a `Weights` value and must be supplied here.
    pub fn from_weights(weights: Weights, learning_rate: f64) -> Result<Network> {
        weights.validate()?;
        Ok(Network {
            input_size: weights.input_layer_size(),
            hidden_size: weights.hidden_layer_size(),
            output_size: weights.output_layer_size(),
            learning_rate,
            weights,
            cache: None,
        })
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    pub fn output_size(&self) -> usize {
        self.output_size
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Read access to the current weight store.
    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Runs one forward pass and returns the output activations.
    ///
    /// Each layer is a plain weighted sum through its matrix, sigmoid
    /// activated; there are no bias terms at either layer. Overwrites the
    /// cached activations that `backpropagate` consumes.
    pub fn forward(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        if input.len() != self.input_size {
            return Err(NetworkError::Dimension {
                expected: self.input_size,
                actual: input.len(),
            });
        }

        let input_row = Matrix::from_data(vec![input.to_vec()]);
        let hidden = (input_row * self.weights.input_to_hidden.clone()).map(sigmoid);
        let output = (hidden.clone() * self.weights.hidden_to_output.clone()).map(sigmoid);

        let output_row = output.data[0].clone();
        self.cache = Some(ForwardCache {
            input: input.to_vec(),
            hidden: hidden.data[0].clone(),
            output: output_row.clone(),
        });

        Ok(output_row)
    }

    /// Applies one online gradient step toward `expected`, consuming the
    /// activations cached by the immediately preceding `forward`.
    ///
    /// Fails with a sequencing error when no fresh forward pass is cached,
    /// which covers both backpropagate-before-forward and two
    /// backpropagate calls in a row.
    pub fn backpropagate(&mut self, expected: &[f64]) -> Result<()> {
        if expected.len() != self.output_size {
            return Err(NetworkError::Dimension {
                expected: self.output_size,
                actual: expected.len(),
            });
        }
        let cache = self.cache.take().ok_or(NetworkError::Sequencing)?;

        let input = Matrix::from_data(vec![cache.input]);
        let hidden = Matrix::from_data(vec![cache.hidden]);
        let output = Matrix::from_data(vec![cache.output]);

        // δ_out = (expected − output) ⊙ σ'(output), in activation space.
        let error = Matrix::from_data(vec![expected
            .iter()
            .zip(output.data[0].iter())
            .map(|(e, o)| e - o)
            .collect()]);
        let output_delta = error.hadamard(&output.map(sigmoid_derivative));

        // δ_hidden = (δ_out · W_hoᵀ) ⊙ σ'(hidden), against the pre-update
        // hidden-to-output weights.
        let hidden_delta = (output_delta.clone() * self.weights.hidden_to_output.transpose())
            .hadamard(&hidden.map(sigmoid_derivative));

        // The error term already carries the sign, so both updates add.
        let lr = self.learning_rate;
        self.weights.hidden_to_output = self.weights.hidden_to_output.clone()
            + (hidden.transpose() * output_delta).map(|g| g * lr);
        self.weights.input_to_hidden = self.weights.input_to_hidden.clone()
            + (input.transpose() * hidden_delta).map(|g| g * lr);

        Ok(())
    }

    /// One training step: `forward` then `backpropagate` as a single
    /// operation that cannot be misordered. Returns the pre-update output.
    pub fn train_step(&mut self, input: &[f64], expected: &[f64]) -> Result<Vec<f64>> {
        let output = self.forward(input)?;
        self.backpropagate(expected)?;
        Ok(output)
    }

    /// Trains over `data` for exactly `epochs` full passes in the given
    /// order. Returns the mean squared error of the last epoch.
    pub fn train(&mut self, data: &[(Vec<f64>, Vec<f64>)], epochs: usize) -> Result<f64> {
        trainer::train_network(self, data, epochs)
    }

    /// Like `train`, but invokes `observer` once per completed epoch.
    pub fn train_with_observer(
        &mut self,
        data: &[(Vec<f64>, Vec<f64>)],
        epochs: usize,
        observer: &mut dyn FnMut(&EpochStats),
    ) -> Result<f64> {
        trainer::train_network_with_observer(self, data, epochs, observer)
    }

    /// Inference entry point. This is `forward` by another name: it also
    /// overwrites the cached activations, so interleaving `predict` with a
    /// `forward`/`backpropagate` pair re-arms the update with the
    /// predicted sample.
    pub fn predict(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        self.forward(input)
    }

    /// Writes the trained weights and the learning rate to `path` as JSON.
    pub fn save_json(&self, path: &str) -> Result<()> {
        model_file::save(&self.weights, Some(self.learning_rate), path)
    }

    /// Reads a model file and rebuilds a trainable network. Layer sizes
    /// are recovered from the persisted matrix shapes; files without a
    /// `learningRate` field fall back to `DEFAULT_LEARNING_RATE`.
    pub fn load_json(path: &str) -> Result<Network> {
        let (weights, learning_rate) = model_file::load(path)?;
        Network::from_weights(weights, learning_rate.unwrap_or(DEFAULT_LEARNING_RATE))
    }
}
