use clap::Parser;
use daily_weather_bot::utils::{logger, validation::Validate};
use daily_weather_bot::{BotEngine, CliConfig, WeatherPipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting daily-weather-bot");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 建立管道並執行
    let pipeline = WeatherPipeline::new(config)?;
    let engine = BotEngine::new(pipeline);

    match engine.run().await {
        Ok(report) => {
            tracing::info!("✅ Forecast for {} delivered", report.date);
            println!("✅ Forecast for {} delivered", report.date);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Err(e) => {
            tracing::error!("❌ Run failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            std::process::exit(1);
        }
    }

    Ok(())
}
