use std::ops::{Add, Index, IndexMut, Mul};

use crate::error::{Error, Result};

/// Dense row-major matrix of `f64` with dimensions fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Builds a matrix from row literals. Every row must have `C` entries.
    pub fn from_rows<const C: usize>(rows: &[[f64; C]]) -> Self {
        Self {
            rows: rows.len(),
            cols: C,
            data: rows.iter().flatten().copied().collect(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(Error::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.offset(row, col).map(|i| self.data[i])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut f64> {
        let i = self.offset(row, col)?;
        Ok(&mut self.data[i])
    }

    /// Column `col` of a two-row matrix as a point.
    pub fn column(&self, col: usize) -> Result<cgmath::Vector2<f64>> {
        Ok(cgmath::vec2(self.get(0, col)?, self.get(1, col)?))
    }

    pub fn checked_add(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            return Err(Error::DimensionMismatch {
                op: "addition",
                lhs: (self.rows, self.cols),
                rhs: (rhs.rows, rhs.cols),
            });
        }

        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(&rhs.data)
                .map(|(a, b)| a + b)
                .collect(),
        })
    }

    pub fn checked_mul(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols != rhs.rows {
            return Err(Error::DimensionMismatch {
                op: "multiplication",
                lhs: (self.rows, self.cols),
                rhs: (rhs.rows, rhs.cols),
            });
        }

        let mut product = Matrix::zeros(self.rows, rhs.cols);
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                product.data[i * rhs.cols + j] = (0..self.cols)
                    .map(|k| self.data[i * self.cols + k] * rhs.data[k * rhs.cols + j])
                    .sum();
            }
        }
        Ok(product)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        match self.offset(row, col) {
            Ok(i) => &self.data[i],
            Err(err) => panic!("{err}"),
        }
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        match self.offset(row, col) {
            Ok(i) => &mut self.data[i],
            Err(err) => panic!("{err}"),
        }
    }
}

impl Add<&Matrix> for &Matrix {
    type Output = Matrix;

    fn add(self, rhs: &Matrix) -> Matrix {
        self.checked_add(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl Add for Matrix {
    type Output = Matrix;

    fn add(self, rhs: Matrix) -> Matrix {
        &self + &rhs
    }
}

impl Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        self.checked_mul(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}
