//! Standard scaling (per-column z-score)

use ndarray::{Array1, Array2, ArrayView1, Axis};

/// Standard deviations at or below this are treated as a constant column
pub const MIN_STD: f64 = 1e-12;

/// Per-feature mean and standard deviation fitted on the training matrix
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: Array1<f64>,
    std: Array1<f64>,
}

impl StandardScaler {
    /// Fit on an `(n_samples, n_features)` matrix. Returns `None` for an empty matrix.
    ///
    /// Uses the population standard deviation. A constant column gets a
    /// scale of 1.0, so it is only centered.
    pub fn fit(x: &Array2<f64>) -> Option<Self> {
        let mean = x.mean_axis(Axis(0))?;
        let std = x
            .std_axis(Axis(0), 0.0)
            .mapv(|s| if s > MIN_STD { s } else { 1.0 });

        Some(Self { mean, std })
    }

    pub fn mean(&self) -> &Array1<f64> {
        &self.mean
    }

    pub fn std(&self) -> &Array1<f64> {
        &self.std
    }

    /// `(x - mean) / std` for each row
    pub fn transform(&self, x: &Array2<f64>) -> Array2<f64> {
        (x - &self.mean) / &self.std
    }

    /// Scale a single feature vector
    pub fn transform_row(&self, row: ArrayView1<f64>) -> Array1<f64> {
        (&row - &self.mean) / &self.std
    }

    /// `x_scaled * std + mean` for a single vector
    #[cfg(test)]
    pub fn inverse_transform_row(&self, row: ArrayView1<f64>) -> Array1<f64> {
        &row * &self.std + &self.mean
    }
}
