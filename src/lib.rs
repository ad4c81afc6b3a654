pub mod app;
pub mod config;
pub mod dataset;
pub mod error;
pub mod model;
pub mod report;
pub mod scalers;
pub mod trainer;

pub use dataset::Dataset;
pub use error::{Error, Result};
pub use model::Model;
pub use scalers::{standardize, StandardScaler};
pub use trainer::{train, GradientDescent, LogEntry, Training, LOG_INTERVAL};
