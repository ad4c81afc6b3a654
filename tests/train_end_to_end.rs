//! End-to-end training on a small `km,price` dataset with the reference
//! hyper-parameters.

use approx::assert_relative_eq;
use car_price_regressor::{
    config::TrainConfig, Dataset, GradientDescent, Model, StandardScaler, LOG_INTERVAL,
};

const DATASET: &str = "km,price\n10000,20000\n20000,18000\n30000,16000\n40000,14000\n";

fn train_reference() -> (StandardScaler, car_price_regressor::Training) {
    let dataset = Dataset::from_reader(DATASET.as_bytes()).unwrap();
    let config = TrainConfig::default();
    let scaler = StandardScaler::fit(dataset.mileage()).unwrap();
    let mileage = scaler.transform_all(dataset.mileage());

    let training = GradientDescent::new(config.learning_rate, config.num_iterations)
        .train(&mileage, dataset.price())
        .unwrap();
    (scaler, training)
}

#[test]
fn price_decreases_with_mileage() {
    let (_, training) = train_reference();
    let Model { theta0, theta1 } = training.model;

    assert!(theta1 < 0.0);
    // standardized mileage has mean 0, so theta0 heads for the mean price
    // and covers 1 - (1 - 1e-4)^10000 of the way
    assert!(theta0 > 0.0 && theta0 < 17000.0);
    assert_relative_eq!(theta0, 17000.0 * (1.0 - (1.0 - 1e-4_f64).powi(10000)), max_relative = 1e-6);
    assert_relative_eq!(theta0, 10746.36221064019, max_relative = 1e-9);
    assert_relative_eq!(theta1, -1413.5056714015482, max_relative = 1e-9);
}

#[test]
fn history_matches_reference_run() {
    let (_, training) = train_reference();

    assert_eq!(training.history.len(), 100);
    let first = training.history[0];
    assert_eq!(first.iteration, 0);
    assert_relative_eq!(first.cost, 147_000_000.0, max_relative = 1e-12);

    let last = training.history[99];
    assert_eq!(last.iteration, 99 * LOG_INTERVAL);
    assert_relative_eq!(last.cost, 20_294_168.52859726, max_relative = 1e-9);
    assert!(last.cost < first.cost);
}

#[test]
fn saved_model_predicts_raw_mileage() {
    let (scaler, training) = train_reference();
    let path = std::env::temp_dir().join(format!(
        "car_price_regressor_{}_e2e_model.txt",
        std::process::id()
    ));

    training.model.save(&path).unwrap();
    let model = Model::load(&path).unwrap();
    assert_eq!(model, training.model);

    let cheap = model.estimate_price(scaler.transform(40000.0));
    let expensive = model.estimate_price(scaler.transform(10000.0));
    assert!(cheap < expensive);
    assert_relative_eq!(model.estimate_price(scaler.transform(25000.0)), model.theta0, epsilon = 1e-9);
    std::fs::remove_file(path).unwrap();
}
