//! Dense matrices of [`Expr`] and the linear-algebra operations on them.
//!
//! Storage is row-major. Zero tests are exact: a canonical [`Expr`] is zero
//! only when its numerator is the zero polynomial, so a symbolic pivot such
//! as `a - b` is treated as nonzero.

use crate::errors::{non_square, shape_mismatch, singular, AlgebraResult};
use crate::expr::Expr;

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct SymbolicMatrix {
    rows: usize,
    cols: usize,
    data: Vec<Expr>,
}

impl SymbolicMatrix {
    /// Build from row-major `data`; `None` unless `data.len() == rows * cols`.
    /// A matrix with no rows has no columns either.
    #[must_use]
    pub fn from_vec(rows: usize, cols: usize, data: Vec<Expr>) -> Option<Self> {
        let cols = if rows == 0 { 0 } else { cols };
        (data.len() == rows * cols).then_some(Self { rows, cols, data })
    }

    /// Build from rows; `None` if the rows differ in length.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<Expr>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }
        Self::from_vec(height, width, rows.into_iter().flatten().collect())
    }

    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        let cols = if rows == 0 { 0 } else { cols };
        Self {
            rows,
            cols,
            data: vec![Expr::zero(); rows * cols],
        }
    }

    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = Expr::one();
        }
        m
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Entry at `(row, col)`. Panics when out of bounds, like slice indexing.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> &Expr {
        &self.data[row * self.cols + col]
    }

    /// Rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Expr]> {
        (0..self.rows).map(move |r| &self.data[r * self.cols..(r + 1) * self.cols])
    }

    #[must_use]
    pub fn map(&self, f: impl FnMut(&Expr) -> Expr) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(f).collect(),
        }
    }

    /// Every entry simplified.
    #[must_use]
    pub fn simplify(&self) -> Self {
        self.map(Expr::simplify)
    }

    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..self.cols {
            for r in 0..self.rows {
                data.push(self.get(r, c).clone());
            }
        }
        Self {
            rows: self.cols,
            cols: if self.cols == 0 { 0 } else { self.rows },
            data,
        }
    }

    pub fn add(&self, other: &Self) -> AlgebraResult<Self> {
        self.zip_with(other, "+", Expr::add)
    }

    pub fn sub(&self, other: &Self) -> AlgebraResult<Self> {
        self.zip_with(other, "-", Expr::sub)
    }

    fn zip_with(
        &self,
        other: &Self,
        op: &'static str,
        f: impl Fn(&Expr, &Expr) -> Expr,
    ) -> AlgebraResult<Self> {
        if self.shape() != other.shape() {
            return Err(shape_mismatch(op, self.shape(), other.shape()));
        }
        let data = self.data.iter().zip(&other.data).map(|(a, b)| f(a, b)).collect();
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Matrix product; requires `self.cols == other.rows`.
    pub fn mul(&self, other: &Self) -> AlgebraResult<Self> {
        if self.cols != other.rows {
            return Err(shape_mismatch("*", self.shape(), other.shape()));
        }
        let mut data = Vec::with_capacity(self.rows * other.cols);
        for r in 0..self.rows {
            for c in 0..other.cols {
                let mut acc = Expr::zero();
                for k in 0..self.cols {
                    acc = acc.add(&self.get(r, k).mul(other.get(k, c)));
                }
                data.push(acc);
            }
        }
        Ok(Self {
            rows: self.rows,
            cols: if self.rows == 0 { 0 } else { other.cols },
            data,
        })
    }

    #[must_use]
    pub fn scalar_mul(&self, scalar: &Expr) -> Self {
        self.map(|e| scalar.mul(e))
    }

    /// Elementwise division; a zero scalar is a division by zero.
    pub fn scalar_div(&self, scalar: &Expr) -> AlgebraResult<Self> {
        let inv = scalar.recip()?;
        Ok(self.map(|e| e.mul(&inv)))
    }

    pub fn trace(&self) -> AlgebraResult<Expr> {
        if !self.is_square() {
            return Err(non_square("trace", self.rows, self.cols));
        }
        let sum = (0..self.rows).fold(Expr::zero(), |acc, i| acc.add(self.get(i, i)));
        Ok(sum.simplify())
    }

    /// Determinant by fraction-free (Bareiss) elimination.
    ///
    /// The determinant of the empty matrix is `1`.
    pub fn determinant(&self) -> AlgebraResult<Expr> {
        if !self.is_square() {
            return Err(non_square("determinant", self.rows, self.cols));
        }
        let n = self.rows;
        let mut rows: Vec<Vec<Expr>> = self.iter_rows().map(<[Expr]>::to_vec).collect();
        let mut previous = Expr::one();
        let mut negate = false;
        for k in 0..n {
            let Some(pivot) = (k..n).find(|&i| !rows[i][k].is_zero()) else {
                return Ok(Expr::zero());
            };
            if pivot != k {
                rows.swap(pivot, k);
                negate = !negate;
            }
            for i in k + 1..n {
                for j in k + 1..n {
                    let cross = rows[k][k].mul(&rows[i][j]).sub(&rows[i][k].mul(&rows[k][j]));
                    rows[i][j] = cross.div(&previous)?.simplify();
                }
                rows[i][k] = Expr::zero();
            }
            previous = rows[k][k].clone();
        }
        let det = if n == 0 { Expr::one() } else { previous };
        let det = if negate { det.neg() } else { det };
        tracing::trace!(n, "determinant");
        Ok(det.simplify())
    }

    /// Reduced row echelon form and the pivot column indices.
    #[must_use]
    pub fn rref(&self) -> (Self, Vec<usize>) {
        let mut rows: Vec<Vec<Expr>> = self.iter_rows().map(<[Expr]>::to_vec).collect();
        let pivots = gauss_jordan(&mut rows, self.cols);
        let data = rows.into_iter().flatten().collect();
        (
            Self {
                rows: self.rows,
                cols: self.cols,
                data,
            },
            pivots,
        )
    }

    #[must_use]
    pub fn rank(&self) -> usize {
        self.rref().1.len()
    }

    /// Inverse by Gauss-Jordan elimination on `[self | I]`.
    pub fn inverse(&self) -> AlgebraResult<Self> {
        if !self.is_square() {
            return Err(non_square("inverse", self.rows, self.cols));
        }
        let n = self.rows;
        let mut rows: Vec<Vec<Expr>> = self
            .iter_rows()
            .enumerate()
            .map(|(i, row)| {
                let mut augmented = row.to_vec();
                augmented.extend((0..n).map(|j| if i == j { Expr::one() } else { Expr::zero() }));
                augmented
            })
            .collect();
        let pivots = gauss_jordan(&mut rows, n);
        if pivots.len() < n {
            return Err(singular());
        }
        let data = rows.into_iter().flat_map(|row| row.into_iter().skip(n)).collect();
        Ok(Self {
            rows: n,
            cols: n,
            data,
        })
    }
}

/// Reduce `rows` in place, pivoting only in the first `pivot_cols` columns.
/// Returns the pivot columns.
fn gauss_jordan(rows: &mut [Vec<Expr>], pivot_cols: usize) -> Vec<usize> {
    let mut pivots = Vec::new();
    let mut r = 0;
    for c in 0..pivot_cols {
        if r == rows.len() {
            break;
        }
        let Some(found) = (r..rows.len()).find(|&i| !rows[i][c].is_zero()) else {
            continue;
        };
        rows.swap(found, r);

        // Pivot is nonzero, so `recip` cannot fail.
        if let Ok(inv) = rows[r][c].recip() {
            for entry in &mut rows[r] {
                *entry = entry.mul(&inv).simplify();
            }
        }
        let pivot_row = rows[r].clone();
        for (i, row) in rows.iter_mut().enumerate() {
            if i == r || row[c].is_zero() {
                continue;
            }
            let factor = row[c].clone();
            for (entry, p) in row.iter_mut().zip(&pivot_row) {
                *entry = entry.sub(&factor.mul(p)).simplify();
            }
        }
        pivots.push(c);
        r += 1;
    }
    pivots
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
