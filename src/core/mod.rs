pub mod condition;
pub mod engine;
pub mod forecast;
pub mod message;
pub mod pipeline;

pub use crate::domain::model::{Coordinates, ForecastRecord, RunReport};
pub use crate::domain::ports::{ConfigProvider, Pipeline};
pub use crate::utils::error::Result;
