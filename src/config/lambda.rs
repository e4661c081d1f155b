#[cfg(feature = "lambda")]
use crate::core::ConfigProvider;
#[cfg(feature = "lambda")]
use crate::utils::error::{Result, WeatherBotError};
#[cfg(feature = "lambda")]
use crate::utils::validation::{validate_coordinate, validate_url, Validate};
#[cfg(feature = "lambda")]
use std::env;

#[cfg(feature = "lambda")]
#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub latitude: String,
    pub longitude: String,
    pub webhook_url: String,
    pub api_endpoint: String,
}

#[cfg(feature = "lambda")]
impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            latitude: required_env("LAT")?,
            longitude: required_env("LON")?,
            webhook_url: required_env("DISCORD_WEBHOOK_URL")?,
            api_endpoint: env::var("API_ENDPOINT")
                .unwrap_or_else(|_| super::DEFAULT_API_ENDPOINT.to_string()),
        })
    }
}

// 環境變數前後空白一律修掉，排程設定常常多帶換行
#[cfg(feature = "lambda")]
fn required_env(name: &str) -> Result<String> {
    env::var(name)
        .map(|v| v.trim().to_string())
        .map_err(|_| WeatherBotError::MissingConfig {
            field: name.to_string(),
        })
}

#[cfg(feature = "lambda")]
impl ConfigProvider for LambdaConfig {
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

#[cfg(feature = "lambda")]
impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_url("webhook_url", &self.webhook_url)?;
        validate_coordinate("latitude", &self.latitude)?;
        validate_coordinate("longitude", &self.longitude)?;

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}
