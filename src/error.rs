use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot standardize an empty sequence")]
    EmptyInput,

    #[error("input has zero or non-finite variance (std_dev = {std_dev}), standardization is undefined")]
    DegenerateInput { std_dev: f64 },

    #[error("mileage has {mileage} samples but price has {price}")]
    LengthMismatch { mileage: usize, price: usize },

    #[error("error while loading dataset {path}: {reason}")]
    DatasetLoad { path: PathBuf, reason: String },

    #[error("error while saving model to {path}: {source}")]
    ModelSave {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error while loading model from {path}: {reason}")]
    ModelLoad { path: PathBuf, reason: String },

    #[error("error while writing training history to {path}: {source}")]
    HistoryWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
