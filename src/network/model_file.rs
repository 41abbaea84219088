use std::fs;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::math::matrix::Matrix;
use crate::network::weights::Weights;

/// On-disk model layout.
///
/// The two weight fields are the wire contract: row-major matrices of
/// floats. `learningRate` came later and stays optional so files written
/// without it still load (same pattern as the optional `metadata` block on
/// older architecture files).
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelFile {
    #[serde(rename = "weightsInputToHidden")]
    pub weights_input_to_hidden: Vec<Vec<f64>>,
    #[serde(rename = "weightsHiddenToOutput")]
    pub weights_hidden_to_output: Vec<Vec<f64>>,
    #[serde(rename = "learningRate", default, skip_serializing_if = "Option::is_none")]
    pub learning_rate: Option<f64>,
}

/// Serializes `weights` (and the learning rate, if given) to
/// pretty-printed JSON at `path`. The file is written whole in a single
/// operation; there is no partial-success mode.
pub fn save(weights: &Weights, learning_rate: Option<f64>, path: &str) -> Result<()> {
    let file = ModelFile {
        weights_input_to_hidden: weights.input_to_hidden.data.clone(),
        weights_hidden_to_output: weights.hidden_to_output.data.clone(),
        learning_rate,
    };
    let json = serde_json::to_string_pretty(&file)?;
    fs::write(path, json)?;
    Ok(())
}

/// Reads a model file back into a validated weight store plus the
/// persisted learning rate, if the file carries one.
///
/// Fails with an I/O error if `path` cannot be read, a parse error if the
/// content is not well-formed JSON for this layout, and a shape error if
/// either matrix is empty, ragged, or the two disagree on the hidden size.
pub fn load(path: &str) -> Result<(Weights, Option<f64>)> {
    let json = fs::read_to_string(path)?;
    let file: ModelFile = serde_json::from_str(&json)?;
    let weights = Weights::new(
        Matrix::try_from_rows(file.weights_input_to_hidden)?,
        Matrix::try_from_rows(file.weights_hidden_to_output)?,
    )?;
    Ok((weights, file.learning_rate))
}
