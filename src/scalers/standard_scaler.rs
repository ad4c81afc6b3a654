use crate::error::{Error, Result};

/// Z-score scaler fitted on the population statistics of a sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardScaler {
    mean: f64,
    std_dev: f64,
}

impl StandardScaler {
    /// Computes mean and population standard deviation (divides by `n`).
    ///
    /// Fails on empty input and on input whose standard deviation is zero or
    /// not finite, since every transformed value would be NaN or infinite.
    pub fn fit(data: &[f64]) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::EmptyInput);
        }
        let n = data.len() as f64;
        let mean = data.iter().sum::<f64>() / n;
        let var = data.iter().map(|&value| (value - mean).powi(2)).sum::<f64>() / n;
        let std_dev = var.sqrt();

        if std_dev == 0.0 || !std_dev.is_finite() {
            return Err(Error::DegenerateInput { std_dev });
        }

        Ok(StandardScaler { mean, std_dev })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    pub fn transform(&self, value: f64) -> f64 {
        (value - self.mean) / self.std_dev
    }

    pub fn transform_all(&self, data: &[f64]) -> Vec<f64> {
        data.iter().map(|&value| self.transform(value)).collect()
    }
}

/// Fits a [`StandardScaler`] on `data` and returns the standardized sequence.
pub fn standardize(data: &[f64]) -> Result<Vec<f64>> {
    Ok(StandardScaler::fit(data)?.transform_all(data))
}
