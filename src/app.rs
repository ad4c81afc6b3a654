//! `train` and `predict` commands as run by the binary.
//!
//! Dataset, scaling and training failures abort the command. A model or
//! history file that cannot be written is logged and the command still
//! succeeds with the trained model.

use std::time::Instant;

use log::{error, info};

use crate::{
    config::{Command, PredictConfig, TrainConfig},
    error::Result,
    model::Model,
    report::{progress_line, write_history},
    scalers::StandardScaler,
    trainer::GradientDescent,
    Dataset,
};

/// Runs `command` and returns the process exit status.
pub fn run(command: &Command) -> i32 {
    let outcome = match command {
        Command::Train(config) => train(config).map(|_| ()),
        Command::Predict(config) => predict(config).map(|price| println!("{:.2}", price)),
    };
    match outcome {
        Ok(()) => 0,
        Err(e) => {
            error!("{}", e);
            1
        }
    }
}

pub fn train(config: &TrainConfig) -> Result<Model> {
    let now = Instant::now();
    let dataset = Dataset::from_path(&config.dataset_path)?;
    let scaler = StandardScaler::fit(dataset.mileage())?;
    let mileage = scaler.transform_all(dataset.mileage());

    info!("Training model...");
    let trainer = GradientDescent::new(config.learning_rate, config.num_iterations);
    let mut history = Vec::new();
    let model = trainer.train_with(&mileage, dataset.price(), |entry| {
        info!("{}", progress_line(&entry));
        history.push(entry);
    })?;

    match model.save(&config.model_path) {
        Ok(()) => info!("Model saved to {}", config.model_path.display()),
        Err(e) => error!("{}", e),
    }
    if let Some(path) = &config.history_path {
        if let Err(e) = write_history(path, &history) {
            error!("{}", e);
        }
    }

    info!(
        "Training completed: theta0 = {:.4}, theta1 = {:.4}",
        model.theta0, model.theta1
    );
    info!("Elapsed: {:.2?}", now.elapsed());
    Ok(model)
}

/// Estimates the price for `config.mileage`. The scaler is refitted on the
/// training dataset since the model file only stores the coefficients.
pub fn predict(config: &PredictConfig) -> Result<f64> {
    let model = Model::load(&config.model_path)?;
    let scaler = StandardScaler::fit(Dataset::from_path(&config.dataset_path)?.mileage())?;
    Ok(model.estimate_price(scaler.transform(config.mileage)))
}
