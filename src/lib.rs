pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

#[cfg(feature = "lambda")]
pub use config::lambda::LambdaConfig;

pub use crate::core::{condition::ConditionLabel, engine::BotEngine, pipeline::WeatherPipeline};
pub use domain::model::{Coordinates, ForecastRecord, RunReport};
pub use utils::error::{Result, WeatherBotError};
