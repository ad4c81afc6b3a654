use std::{fs, path::Path};

use log::debug;

use crate::error::{Error, Result};

/// Affine map `price = theta0 + theta1 * standardized_mileage`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Model {
    pub theta0: f64,
    pub theta1: f64,
}

impl Model {
    pub fn new(theta0: f64, theta1: f64) -> Self {
        Model { theta0, theta1 }
    }

    /// `mileage` must already be standardized with the training statistics.
    pub fn estimate_price(&self, mileage: f64) -> f64 {
        self.theta0 + self.theta1 * mileage
    }

    /// Writes `theta0` and `theta1` on two lines, creating the parent
    /// directory when it does not exist yet.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let save_err = |source| Error::ModelSave {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(save_err)?;
        }
        fs::write(path, format!("{}\n{}", self.theta0, self.theta1)).map_err(save_err)?;

        debug!("model written to {}", path.display());
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let load_err = |reason: String| Error::ModelLoad {
            path: path.to_path_buf(),
            reason,
        };

        let content = fs::read_to_string(path).map_err(|e| load_err(e.to_string()))?;
        let mut lines = content.lines().map(str::trim).filter(|l| !l.is_empty());

        let mut next_theta = |name: &str| -> Result<f64> {
            let line = lines
                .next()
                .ok_or_else(|| load_err(format!("missing {}", name)))?;
            line.parse::<f64>()
                .map_err(|e| load_err(format!("invalid {} {:?}: {}", name, line, e)))
        };
        let theta0 = next_theta("theta0")?;
        let theta1 = next_theta("theta1")?;

        debug!("model loaded from {}", path.display());
        Ok(Model { theta0, theta1 })
    }
}
