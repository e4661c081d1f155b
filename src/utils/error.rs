use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeatherBotError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },

    #[error("Invalid configuration value for {field} (\"{value}\"): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Forecast fetch failed: {message}")]
    FetchFailed { message: String },

    #[error("Forecast data incomplete: {message}")]
    IncompleteForecast { message: String },

    #[error("Webhook rejected delivery ({status}): {body}")]
    DeliveryRejected { status: u16, body: String },

    #[error("Webhook delivery failed: {message}")]
    DeliveryFailed { message: String },
}

impl WeatherBotError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MissingConfig { field } => {
                format!("Configuration is missing the required field `{}`", field)
            }
            Self::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration field `{}` is invalid: {}", field, reason)
            }
            Self::FetchFailed { .. } | Self::IncompleteForecast { .. } => {
                "Could not retrieve today's forecast from the weather API".to_string()
            }
            Self::DeliveryRejected { status, .. } => {
                format!("The webhook refused the message (HTTP {})", status)
            }
            Self::DeliveryFailed { .. } => {
                "Could not reach the webhook endpoint".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::MissingConfig { .. } | Self::InvalidConfigValue { .. } => {
                "Check the latitude, longitude and webhook URL settings"
            }
            Self::FetchFailed { .. } | Self::IncompleteForecast { .. } => {
                "Verify the coordinates and that the forecast API is reachable, then rerun"
            }
            Self::DeliveryRejected { .. } => {
                "Verify the webhook URL is current; rotated webhooks return 404"
            }
            Self::DeliveryFailed { .. } => "Check network connectivity and rerun",
            _ => "Rerun the invocation; the scheduler provides the retry",
        }
    }
}

pub type Result<T> = std::result::Result<T, WeatherBotError>;
