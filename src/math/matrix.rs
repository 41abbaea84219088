use rand::prelude::*;
use std::f64::consts::PI;
use std::ops::{Add, Mul};

use crate::error::{NetworkError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Samples a single value from N(0, 1) using the Box-Muller transform.
    /// Both u1 and u2 must be uniform on (0, 1].
    fn sample_standard_normal<R: Rng>(rng: &mut R) -> f64 {
        // Draw two independent uniform samples in (0, 1] to avoid log(0).
        let u1: f64 = 1.0 - rng.gen::<f64>();
        let u2: f64 = 1.0 - rng.gen::<f64>();
        (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    }

    /// Fan-scaled Gaussian initialization: samples from
    /// N(0, sqrt(2 / (rows + cols))).
    ///
    /// `rows` and `cols` are the sizes of the two layers this matrix
    /// connects, so the spread shrinks as either layer grows. Keeps the
    /// variance of sigmoid activations roughly stable across layers at the
    /// start of training.
    ///
    /// The caller supplies the RNG; pass a seeded `StdRng` for a
    /// reproducible matrix.
    pub fn fan_scaled<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let std_dev = (2.0 / (rows + cols) as f64).sqrt();
        let mut res = Matrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = Matrix::sample_standard_normal(rng) * std_dev;
            }
        }
        res
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix::from_data(
            (self.data)
                .clone()
                .into_iter()
                .map(|row| row.into_iter().map(|x| functor(x)).collect())
                .collect(),
        )
    }

    /// Element-wise (Hadamard) product of two same-shape matrices.
    pub fn hadamard(&self, rhs: &Matrix) -> Matrix {
        assert_eq!(self.rows, rhs.rows);
        assert_eq!(self.cols, rhs.cols);
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(row_a, row_b)| {
                row_a.iter().zip(row_b.iter()).map(|(x, y)| x * y).collect()
            })
            .collect();
        Matrix::from_data(data)
    }

    /// Builds a matrix from trusted row data. Rows must be non-empty and
    /// rectangular; use `try_from_rows` for data read from the outside.
    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data[0].len(),
            data,
        }
    }

    /// Builds a matrix from untrusted row data, rejecting anything that is
    /// not a non-empty rectangle.
    pub fn try_from_rows(data: Vec<Vec<f64>>) -> Result<Matrix> {
        if data.is_empty() || data[0].is_empty() {
            return Err(NetworkError::Shape("matrix must not be empty".into()));
        }
        let cols = data[0].len();
        if data.iter().any(|row| row.len() != cols) {
            return Err(NetworkError::Shape(
                "matrix rows must all have the same length".into(),
            ));
        }
        Ok(Matrix {
            rows: data.len(),
            cols,
            data,
        })
    }
}

impl Add for Matrix {
    type Output = Matrix;

    fn add(self, rhs: Self) -> Self::Output {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = Matrix::zeros(self.rows, self.cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = self.data[i][j] + rhs.data[i][j];
            }
        }

        res
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.cols != rhs.rows {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;

                for k in 0..self.cols {
                    sum += self.data[i][k] * rhs.data[k][j];
                }

                res.data[i][j] = sum;
            }
        }

        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    #[test]
    fn zeros_has_requested_shape() {
        let m = Matrix::zeros(3, 2);
        assert_eq!(m.rows, 3);
        assert_eq!(m.cols, 2);
        assert_eq!(m.data, vec![vec![0.0, 0.0]; 3]);
    }

    #[test]
    fn try_from_rows_rejects_empty_matrices() {
        assert!(Matrix::try_from_rows(vec![]).is_err());
        assert!(Matrix::try_from_rows(vec![vec![]]).is_err());
    }

    #[test]
    fn try_from_rows_rejects_ragged_rows() {
        let err = Matrix::try_from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(err.is_err());
    }

    #[test]
    fn try_from_rows_accepts_a_rectangle() {
        let m = Matrix::try_from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.rows, 2);
        assert_eq!(m.cols, 2);
    }

    #[test]
    fn transpose_swaps_rows_and_cols() {
        let m = Matrix::from_data(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let t = m.transpose();
        assert_eq!(t.rows, 3);
        assert_eq!(t.cols, 2);
        assert_eq!(t.data, vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]);
    }

    #[test]
    fn mul_is_the_standard_matrix_product() {
        let a = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = Matrix::from_data(vec![vec![5.0, 6.0], vec![7.0, 8.0]]);
        let c = a * b;
        assert_eq!(c.data, vec![vec![19.0, 22.0], vec![43.0, 50.0]]);
    }

    #[test]
    fn hadamard_multiplies_elementwise() {
        let a = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = Matrix::from_data(vec![vec![5.0, 6.0], vec![7.0, 8.0]]);
        let c = a.hadamard(&b);
        assert_eq!(c.data, vec![vec![5.0, 12.0], vec![21.0, 32.0]]);
    }

    #[test]
    fn fan_scaled_is_deterministic_for_a_fixed_seed() {
        let a = Matrix::fan_scaled(3, 4, &mut StdRng::seed_from_u64(7));
        let b = Matrix::fan_scaled(3, 4, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn fan_scaled_spread_shrinks_with_layer_sizes() {
        let small = Matrix::fan_scaled(20, 20, &mut StdRng::seed_from_u64(1));
        let large = Matrix::fan_scaled(200, 200, &mut StdRng::seed_from_u64(1));

        let mean_abs = |m: &Matrix| {
            let total: f64 = m.data.iter().flatten().map(|x| x.abs()).sum();
            total / (m.rows * m.cols) as f64
        };
        assert!(mean_abs(&small) > mean_abs(&large));
    }
}
