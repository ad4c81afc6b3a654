use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub const DEFAULT_LEARNING_RATE: f64 = 0.0001;
pub const DEFAULT_NUM_ITERATIONS: usize = 10000;
pub const DEFAULT_DATASET_PATH: &str = "./data/data.csv";
pub const DEFAULT_MODEL_PATH: &str = "./saved_model/model.txt";

#[derive(Debug, Parser)]
#[command(name = "car-price-regressor", version, about = "Fit car price against mileage with gradient descent")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Train the model on a `km,price` dataset and save its coefficients.
    Train(TrainConfig),
    /// Estimate the price of a car from its mileage.
    Predict(PredictConfig),
}

#[derive(Debug, Clone, PartialEq, Args)]
pub struct TrainConfig {
    #[arg(long = "dataset", default_value = DEFAULT_DATASET_PATH)]
    pub dataset_path: PathBuf,

    #[arg(long = "model", default_value = DEFAULT_MODEL_PATH)]
    pub model_path: PathBuf,

    /// Also write every logged iteration to this CSV file.
    #[arg(long = "history")]
    pub history_path: Option<PathBuf>,

    #[arg(long, default_value_t = DEFAULT_LEARNING_RATE)]
    pub learning_rate: f64,

    #[arg(long = "iterations", default_value_t = DEFAULT_NUM_ITERATIONS)]
    pub num_iterations: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            history_path: None,
            learning_rate: DEFAULT_LEARNING_RATE,
            num_iterations: DEFAULT_NUM_ITERATIONS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Args)]
pub struct PredictConfig {
    /// Mileage in km.
    #[arg(long)]
    pub mileage: f64,

    /// Dataset the model was trained on, used to rebuild the mileage scaling.
    #[arg(long = "dataset", default_value = DEFAULT_DATASET_PATH)]
    pub dataset_path: PathBuf,

    #[arg(long = "model", default_value = DEFAULT_MODEL_PATH)]
    pub model_path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn train_defaults_match_reference_run() {
        let cli = Cli::try_parse_from(["car-price-regressor", "train"]).unwrap();
        let Command::Train(config) = cli.command else {
            panic!("expected train command");
        };
        assert_eq!(config, TrainConfig::default());
    }

    #[test]
    fn train_arguments_override_defaults() {
        let cli = Cli::try_parse_from([
            "car-price-regressor",
            "train",
            "--dataset",
            "cars.csv",
            "--history",
            "history.csv",
            "--learning-rate",
            "0.05",
            "--iterations",
            "250",
        ])
        .unwrap();
        let Command::Train(config) = cli.command else {
            panic!("expected train command");
        };
        assert_eq!(config.dataset_path, PathBuf::from("cars.csv"));
        assert_eq!(config.model_path, PathBuf::from(DEFAULT_MODEL_PATH));
        assert_eq!(config.history_path, Some(PathBuf::from("history.csv")));
        assert_eq!(config.learning_rate, 0.05);
        assert_eq!(config.num_iterations, 250);
    }

    #[test]
    fn predict_requires_mileage() {
        assert!(Cli::try_parse_from(["car-price-regressor", "predict"]).is_err());

        let cli = Cli::try_parse_from(["car-price-regressor", "predict", "--mileage", "42000"]).unwrap();
        let Command::Predict(config) = cli.command else {
            panic!("expected predict command");
        };
        assert_eq!(config.mileage, 42000.0);
    }
}
