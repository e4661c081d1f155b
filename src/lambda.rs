#[cfg(feature = "lambda")]
use daily_weather_bot::config::lambda::LambdaConfig;
#[cfg(feature = "lambda")]
use daily_weather_bot::domain::model::RunReport;
#[cfg(feature = "lambda")]
use daily_weather_bot::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use daily_weather_bot::{BotEngine, WeatherPipeline};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use serde::Deserialize;

#[cfg(feature = "lambda")]
#[derive(Deserialize)]
pub struct Request {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub webhook_url: Option<String>,
    pub api_endpoint: Option<String>,
}

#[cfg(feature = "lambda")]
async fn function_handler(event: LambdaEvent<Request>) -> Result<RunReport, Error> {
    tracing::info!("Starting weather bot Lambda function");

    // 設置環境變量 (如果事件中有的話)
    if let Some(lat) = &event.payload.latitude {
        std::env::set_var("LAT", lat);
    }
    if let Some(lon) = &event.payload.longitude {
        std::env::set_var("LON", lon);
    }
    if let Some(webhook) = &event.payload.webhook_url {
        std::env::set_var("DISCORD_WEBHOOK_URL", webhook);
    }
    if let Some(endpoint) = &event.payload.api_endpoint {
        std::env::set_var("API_ENDPOINT", endpoint);
    }

    let config = LambdaConfig::from_env()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    config
        .validate()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    let pipeline = WeatherPipeline::new(config)
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    let engine = BotEngine::new(pipeline);

    let report = engine
        .run()
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    tracing::info!("Weather bot Lambda function completed successfully");
    Ok(report)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
