//! Batch gradient descent for the single-feature linear model.
//!
//! The loop always runs a fixed number of iterations. Every
//! [`LOG_INTERVAL`]-th iteration a [`LogEntry`] is handed to the caller: its
//! cost is computed from the error vector *before* the update of that
//! iteration, while its coefficients are the ones *after* the update.

use serde::Serialize;

use crate::{
    config::{DEFAULT_LEARNING_RATE, DEFAULT_NUM_ITERATIONS},
    error::{Error, Result},
    model::Model,
};

/// Iterations between two emitted log entries.
pub const LOG_INTERVAL: usize = 100;

/// Progress report of one logged iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LogEntry {
    pub iteration: usize,
    pub cost: f64,
    pub theta0: f64,
    pub theta1: f64,
}

/// Final model together with every emitted log entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Training {
    pub model: Model,
    pub history: Vec<LogEntry>,
}

/// Fixed-iteration batch gradient descent hyper-parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientDescent {
    pub learning_rate: f64,
    pub num_iterations: usize,
}

impl Default for GradientDescent {
    fn default() -> Self {
        GradientDescent {
            learning_rate: DEFAULT_LEARNING_RATE,
            num_iterations: DEFAULT_NUM_ITERATIONS,
        }
    }
}

impl GradientDescent {
    pub fn new(learning_rate: f64, num_iterations: usize) -> Self {
        GradientDescent {
            learning_rate,
            num_iterations,
        }
    }

    /// Trains on `(mileage, price)` and collects the log entries.
    pub fn train(&self, mileage: &[f64], price: &[f64]) -> Result<Training> {
        let mut history = Vec::with_capacity(self.num_iterations.div_ceil(LOG_INTERVAL));
        let model = self.train_with(mileage, price, |entry| history.push(entry))?;
        Ok(Training { model, history })
    }

    /// Trains on `(mileage, price)`, calling `on_entry` at every logged
    /// iteration. `mileage` is expected to be standardized already.
    pub fn train_with<F>(&self, mileage: &[f64], price: &[f64], mut on_entry: F) -> Result<Model>
    where
        F: FnMut(LogEntry),
    {
        if mileage.len() != price.len() {
            return Err(Error::LengthMismatch {
                mileage: mileage.len(),
                price: price.len(),
            });
        }
        if mileage.is_empty() {
            return Err(Error::EmptyInput);
        }

        let m = mileage.len() as f64;
        let mut theta0 = 0.0;
        let mut theta1 = 0.0;
        let mut error = vec![0.0; mileage.len()];

        for i in 0..self.num_iterations {
            for ((err, &x), &y) in error.iter_mut().zip(mileage).zip(price) {
                *err = theta0 + theta1 * x - y;
            }

            let sum_err: f64 = error.iter().sum();
            let sum_err_x: f64 = error.iter().zip(mileage).map(|(err, x)| err * x).sum();

            // both updates read the pre-update coefficients
            let tmp_theta0 = theta0 - self.learning_rate * (1.0 / m) * sum_err;
            let tmp_theta1 = theta1 - self.learning_rate * (1.0 / m) * sum_err_x;
            theta0 = tmp_theta0;
            theta1 = tmp_theta1;

            if i % LOG_INTERVAL == 0 {
                let cost = (1.0 / (2.0 * m)) * error.iter().map(|err| err * err).sum::<f64>();
                on_entry(LogEntry {
                    iteration: i,
                    cost,
                    theta0,
                    theta1,
                });
            }
        }

        Ok(Model { theta0, theta1 })
    }
}

/// Runs [`GradientDescent`] and returns `(theta0, theta1)`, discarding the log.
pub fn train(
    mileage: &[f64],
    price: &[f64],
    learning_rate: f64,
    num_iterations: usize,
) -> Result<(f64, f64)> {
    let model = GradientDescent::new(learning_rate, num_iterations).train_with(mileage, price, |_| {})?;
    Ok((model.theta0, model.theta1))
}
