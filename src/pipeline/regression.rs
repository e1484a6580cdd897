//! Ordinary least-squares linear regression
//!
//! Solves the normal equations on centered data:
//!   `w = (Xc^T Xc)^{-1} Xc^T yc`,  `b = mean(y) - w . mean(X)`
//! Columns with zero variance carry no signal; they get a coefficient of 0
//! and are left out of the solve so they cannot make the system singular.
//! When the remaining columns are collinear (or there are fewer rows than
//! features) the system is solved on a maximal independent subset and the
//! result is projected onto the row space of `Xc`, which gives the
//! minimum-norm least-squares solution.

use ndarray::{Array1, Array2, ArrayView1, Axis};
use thiserror::Error;

/// Column variance at or below this counts as constant
const MIN_VARIANCE: f64 = 1e-12;

/// Pivot tolerance, relative to the largest diagonal entry
const PIVOT_TOLERANCE: f64 = 1e-10;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegressionError {
    #[error("cannot fit on an empty matrix")]
    Empty,

    #[error("feature matrix has {rows} rows but {labels} labels were given")]
    ShapeMismatch { rows: usize, labels: usize },

    #[error("normal equation system is numerically degenerate")]
    Singular,
}

/// Fitted coefficients and intercept
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegression {
    coefficients: Array1<f64>,
    intercept: f64,
}

impl LinearRegression {
    pub fn fit(x: &Array2<f64>, y: &Array1<f64>) -> Result<Self, RegressionError> {
        let (rows, n_features) = x.dim();
        if rows == 0 {
            return Err(RegressionError::Empty);
        }
        if y.len() != rows {
            return Err(RegressionError::ShapeMismatch { rows, labels: y.len() });
        }

        let x_mean = x.mean_axis(Axis(0)).ok_or(RegressionError::Empty)?;
        let y_mean = y.mean().ok_or(RegressionError::Empty)?;
        let xc = x - &x_mean;
        let yc = y - y_mean;

        let active: Vec<usize> = (0..n_features)
            .filter(|&j| {
                let col = xc.column(j);
                col.dot(&col) / rows as f64 > MIN_VARIANCE
            })
            .collect();

        let mut coefficients = Array1::<f64>::zeros(n_features);

        if !active.is_empty() {
            let xa = xc.select(Axis(1), &active);
            let gram = xa.t().dot(&xa);
            let moment = xa.t().dot(&yc);

            let solved = solve_min_norm(&gram, &moment)?;

            for (k, &j) in active.iter().enumerate() {
                coefficients[j] = solved[k];
            }
        }

        let intercept = y_mean - coefficients.dot(&x_mean);

        Ok(Self { coefficients, intercept })
    }

    pub fn coefficients(&self) -> &Array1<f64> {
        &self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn predict_row(&self, row: ArrayView1<f64>) -> f64 {
        row.dot(&self.coefficients) + self.intercept
    }

    pub fn predict(&self, x: &Array2<f64>) -> Array1<f64> {
        x.dot(&self.coefficients) + self.intercept
    }

    /// Coefficient of determination on the given data
    pub fn r_squared(&self, x: &Array2<f64>, y: &Array1<f64>) -> f64 {
        let Some(y_mean) = y.mean() else {
            return 0.0;
        };
        let residuals = y - &self.predict(x);
        let ss_res = residuals.dot(&residuals);
        let centered = y - y_mean;
        let ss_tot = centered.dot(&centered);

        if ss_tot <= MIN_VARIANCE {
            if ss_res <= MIN_VARIANCE { 1.0 } else { 0.0 }
        } else {
            1.0 - ss_res / ss_tot
        }
    }
}

/// Minimum-norm solution of the normal equations `G w = m`
///
/// `G` is symmetric positive semi-definite. A basic solution is found on a
/// maximal set of independent columns, then projected onto the column space
/// of `G` (its own row space) to drop any null-space component.
fn solve_min_norm(gram: &Array2<f64>, moment: &Array1<f64>) -> Result<Array1<f64>, RegressionError> {
    let n = gram.nrows();

    if let Ok(inv) = invert_matrix(gram) {
        return Ok(inv.dot(moment));
    }

    let mut basis: Vec<usize> = Vec::with_capacity(n);
    for j in 0..n {
        basis.push(j);
        if invert_matrix(&sub_matrix(gram, &basis)).is_err() {
            basis.pop();
        }
    }
    if basis.is_empty() {
        return Err(RegressionError::Singular);
    }

    let basic_inv = invert_matrix(&sub_matrix(gram, &basis))?;
    let basic = basic_inv.dot(&moment.select(Axis(0), &basis));
    let mut w0 = Array1::<f64>::zeros(n);
    for (k, &j) in basis.iter().enumerate() {
        w0[j] = basic[k];
    }

    // w = B (B^T B)^{-1} B^T w0, B = G[:, basis]
    let b = gram.select(Axis(1), &basis);
    let btb_inv = invert_matrix(&b.t().dot(&b))?;
    Ok(b.dot(&btb_inv.dot(&b.t().dot(&w0))))
}

fn sub_matrix(m: &Array2<f64>, idx: &[usize]) -> Array2<f64> {
    m.select(Axis(0), idx).select(Axis(1), idx)
}

/// Invert a square matrix using Gauss-Jordan elimination with partial pivoting
fn invert_matrix(m: &Array2<f64>) -> Result<Array2<f64>, RegressionError> {
    let n = m.nrows();

    let scale = m.diag().iter().fold(0.0f64, |acc, v| acc.max(v.abs()));
    let tolerance = (scale * PIVOT_TOLERANCE).max(f64::MIN_POSITIVE);

    // [M | I]
    let mut aug = Array2::<f64>::zeros((n, 2 * n));
    for i in 0..n {
        for j in 0..n {
            aug[[i, j]] = m[[i, j]];
        }
        aug[[i, n + i]] = 1.0;
    }

    for col in 0..n {
        let pivot_row = (col..n)
            .max_by(|&a, &b| aug[[a, col]].abs().total_cmp(&aug[[b, col]].abs()))
            .unwrap_or(col);

        if aug[[pivot_row, col]].abs() < tolerance {
            return Err(RegressionError::Singular);
        }

        if pivot_row != col {
            for j in 0..(2 * n) {
                aug.swap([col, j], [pivot_row, j]);
            }
        }

        let pivot = aug[[col, col]];
        for j in 0..(2 * n) {
            aug[[col, j]] /= pivot;
        }

        for row in 0..n {
            if row == col {
                continue;
            }
            let factor = aug[[row, col]];
            if factor == 0.0 {
                continue;
            }
            for j in 0..(2 * n) {
                aug[[row, j]] -= factor * aug[[col, j]];
            }
        }
    }

    Ok(aug.slice(ndarray::s![.., n..]).to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_recovers_exact_relation() {
        // y = 2*x0 - 3*x1 + 5
        let x = array![[1.0, 2.0], [2.0, 1.0], [3.0, 5.0], [4.0, 3.0], [0.5, 0.0]];
        let y = x.map_axis(Axis(1), |r| 2.0 * r[0] - 3.0 * r[1] + 5.0);

        let model = LinearRegression::fit(&x, &y).unwrap();

        assert!((model.coefficients()[0] - 2.0).abs() < 1e-9);
        assert!((model.coefficients()[1] + 3.0).abs() < 1e-9);
        assert!((model.intercept() - 5.0).abs() < 1e-9);
        assert!((model.r_squared(&x, &y) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_constant_column_gets_zero_coefficient() {
        let x = array![[1.0, 7.0], [2.0, 7.0], [3.0, 7.0], [4.0, 7.0]];
        let y = array![3.0, 5.0, 7.0, 9.0];

        let model = LinearRegression::fit(&x, &y).unwrap();

        assert!((model.coefficients()[0] - 2.0).abs() < 1e-9);
        assert_eq!(model.coefficients()[1], 0.0);
        assert!((model.predict_row(array![5.0, 7.0].view()) - 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_collinear_columns_use_min_norm() {
        let x = array![[1.0, 2.0], [2.0, 4.0], [3.0, 6.0]];
        let y = array![1.0, 2.0, 3.0];

        let model = LinearRegression::fit(&x, &y).unwrap();

        assert!((model.coefficients()[0] - 0.2).abs() < 1e-9);
        assert!((model.coefficients()[1] - 0.4).abs() < 1e-9);
        assert!(model.intercept().abs() < 1e-9);
        assert!((model.r_squared(&x, &y) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_duplicate_columns_share_weight() {
        let x = array![[1.0, 1.0], [2.0, 2.0], [3.0, 3.0], [4.0, 4.0]];
        let y = array![2.0, 4.0, 6.0, 8.0];

        let model = LinearRegression::fit(&x, &y).unwrap();

        assert!((model.coefficients()[0] - 1.0).abs() < 1e-9);
        assert!((model.coefficients()[1] - 1.0).abs() < 1e-9);
        assert!(model.intercept().abs() < 1e-9);
    }

    #[test]
    fn test_fewer_rows_than_features() {
        let x = array![[1.0, 0.0, 2.0], [3.0, 1.0, 0.0]];
        let y = array![1.0, 5.0];

        let model = LinearRegression::fit(&x, &y).unwrap();
        let fitted = model.predict(&x);

        assert!(model.coefficients().iter().all(|c| c.is_finite()));
        assert!((fitted[0] - 1.0).abs() < 1e-9);
        assert!((fitted[1] - 5.0).abs() < 1e-9);
        // minimum norm: the solution lies along the single centered row direction
        assert!((model.coefficients()[0] - 8.0 / 9.0).abs() < 1e-9);
        assert!((model.coefficients()[1] - 4.0 / 9.0).abs() < 1e-9);
        assert!((model.coefficients()[2] + 8.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_shape_mismatch() {
        let x = array![[1.0], [2.0]];
        let y = array![1.0];
        assert!(matches!(
            LinearRegression::fit(&x, &y),
            Err(RegressionError::ShapeMismatch { rows: 2, labels: 1 })
        ));
    }

    #[test]
    fn test_empty() {
        let x = Array2::<f64>::zeros((0, 3));
        let y = Array1::<f64>::zeros(0);
        assert_eq!(LinearRegression::fit(&x, &y).unwrap_err(), RegressionError::Empty);
    }

    #[test]
    fn test_all_constant_predicts_mean() {
        let x = array![[1.0], [1.0], [1.0]];
        let y = array![2.0, 4.0, 6.0];
        let model = LinearRegression::fit(&x, &y).unwrap();
        assert!((model.intercept() - 4.0).abs() < 1e-12);
    }
}
