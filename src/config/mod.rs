pub mod lambda;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_coordinate, validate_url, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_API_ENDPOINT: &str = "https://api.open-meteo.com/v1/forecast";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "daily-weather-bot")]
#[command(about = "Posts today's forecast for a fixed coordinate to a chat webhook")]
pub struct CliConfig {
    #[arg(long)]
    pub latitude: String,

    #[arg(long)]
    pub longitude: String,

    #[arg(long)]
    pub webhook_url: String,

    #[arg(long, default_value = DEFAULT_API_ENDPOINT)]
    pub api_endpoint: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn latitude(&self) -> &str {
        &self.latitude
    }

    fn longitude(&self) -> &str {
        &self.longitude
    }

    fn webhook_url(&self) -> &str {
        &self.webhook_url
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_url("webhook_url", &self.webhook_url)?;
        validate_coordinate("latitude", &self.latitude)?;
        validate_coordinate("longitude", &self.longitude)?;

        tracing::info!("✅ Configuration validation passed");
        Ok(())
    }
}
