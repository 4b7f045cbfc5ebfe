pub mod calculator;

use crate::config::Config;
use calculator::PackCalculator;

pub struct AppState {
    pub config: Config,
    pub calculator: PackCalculator,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            calculator: PackCalculator::default(),
        }
    }
}
