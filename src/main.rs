use std::process;

use car_price_regressor::{app, config::Cli};
use clap::Parser;
use env_logger::Env;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    process::exit(app::run(&cli.command));
}
