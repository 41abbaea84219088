use crate::error::{NetworkError, Result};
use crate::math::matrix::Matrix;

/// The persistable value of a trained network: the two weight matrices.
///
/// Layer sizes are implied by shape rather than stored separately — the
/// input layer is the row count of the first matrix, the hidden layer the
/// row count of the second, and the output layer its column count.
#[derive(Debug, Clone, PartialEq)]
pub struct Weights {
    pub input_to_hidden: Matrix,
    pub hidden_to_output: Matrix,
}

impl Weights {
    /// Couples two matrices into a weight store, rejecting shapes that
    /// cannot describe an input → hidden → output network.
    pub fn new(input_to_hidden: Matrix, hidden_to_output: Matrix) -> Result<Weights> {
        let weights = Weights {
            input_to_hidden,
            hidden_to_output,
        };
        weights.validate()?;
        Ok(weights)
    }

    pub fn input_layer_size(&self) -> usize {
        self.input_to_hidden.rows
    }

    pub fn hidden_layer_size(&self) -> usize {
        self.hidden_to_output.rows
    }

    pub fn output_layer_size(&self) -> usize {
        self.hidden_to_output.cols
    }

    /// Checks the shape invariants: neither matrix may be empty, and the
    /// hidden dimension must agree between the two.
    pub fn validate(&self) -> Result<()> {
        if self.input_to_hidden.rows == 0
            || self.input_to_hidden.cols == 0
            || self.hidden_to_output.rows == 0
            || self.hidden_to_output.cols == 0
        {
            return Err(NetworkError::Shape(
                "weight matrices must not be empty".into(),
            ));
        }
        if self.input_to_hidden.cols != self.hidden_to_output.rows {
            return Err(NetworkError::Shape(format!(
                "hidden size disagrees between matrices: {} columns vs {} rows",
                self.input_to_hidden.cols, self.hidden_to_output.rows
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_sizes_are_derived_from_matrix_shapes() {
        let weights = Weights::new(Matrix::zeros(2, 3), Matrix::zeros(3, 1)).unwrap();
        assert_eq!(weights.input_layer_size(), 2);
        assert_eq!(weights.hidden_layer_size(), 3);
        assert_eq!(weights.output_layer_size(), 1);
    }

    #[test]
    fn empty_matrices_are_rejected() {
        assert!(Weights::new(Matrix::zeros(0, 3), Matrix::zeros(3, 1)).is_err());
        assert!(Weights::new(Matrix::zeros(2, 3), Matrix::zeros(3, 0)).is_err());
    }

    #[test]
    fn mismatched_hidden_sizes_are_rejected() {
        let err = Weights::new(Matrix::zeros(2, 3), Matrix::zeros(4, 1));
        assert!(matches!(err, Err(NetworkError::Shape(_))));
    }
}
