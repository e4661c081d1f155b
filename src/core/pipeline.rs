use crate::core::forecast::ForecastResponse;
use crate::core::{message, ConfigProvider, Coordinates, ForecastRecord, Pipeline};
use crate::utils::error::{Result, WeatherBotError};
use reqwest::Client;
use std::time::Duration;

const USER_AGENT: &str = "daily-weather-bot/1.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const DAILY_FIELDS: &str =
    "weathercode,temperature_2m_max,temperature_2m_min,precipitation_probability_max";

pub struct WeatherPipeline<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> WeatherPipeline<C> {
    pub fn new(config: C) -> Result<Self> {
        // 兩個外部呼叫共用同一個 client，逾時一律 10 秒
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { config, client })
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> Pipeline for WeatherPipeline<C> {
    async fn fetch(&self) -> Result<ForecastRecord> {
        let query = [
            ("latitude", self.config.latitude().trim()),
            ("longitude", self.config.longitude().trim()),
            ("daily", DAILY_FIELDS),
            ("current_weather", "true"),
            ("temperature_unit", "fahrenheit"),
            ("wind_speed_unit", "mph"),
            ("timezone", "America/New_York"),
        ];

        tracing::debug!("Requesting forecast from: {}", self.config.api_endpoint());
        let response = self
            .client
            .get(self.config.api_endpoint())
            .header("Accept", "application/json")
            .query(&query)
            .send()
            .await
            .map_err(|e| WeatherBotError::FetchFailed {
                message: format!("request error: {}", e),
            })?;

        let status = response.status();
        tracing::debug!("Forecast API response status: {}", status);

        if !status.is_success() {
            return Err(WeatherBotError::FetchFailed {
                message: format!("forecast API returned HTTP {}", status.as_u16()),
            });
        }

        let body: ForecastResponse =
            response
                .json()
                .await
                .map_err(|e| WeatherBotError::FetchFailed {
                    message: format!("malformed forecast body: {}", e),
                })?;

        body.into_today()
    }

    fn render(&self, record: &ForecastRecord) -> String {
        message::render(record)
    }

    async fn notify(&self, message: &str) -> Result<()> {
        let payload = serde_json::json!({ "content": message });

        let response = self
            .client
            .post(self.config.webhook_url())
            .header("Accept", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| WeatherBotError::DeliveryFailed {
                message: e.to_string(),
            })?;

        let status = response.status();
        tracing::debug!("Webhook response status: {}", status);

        if !status.is_success() {
            // 回傳內容原封不動帶出來，除錯時要看得到
            let body = response.text().await.unwrap_or_default();
            return Err(WeatherBotError::DeliveryRejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }

    fn location(&self) -> Coordinates {
        Coordinates::new(
            self.config.latitude().trim(),
            self.config.longitude().trim(),
        )
    }
}
