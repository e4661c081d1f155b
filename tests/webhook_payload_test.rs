use anyhow::Result;
use daily_weather_bot::{BotEngine, CliConfig, WeatherPipeline};
use httpmock::prelude::*;

// The webhook payload is a single JSON object with one `content` field; the
// chat platform renders the markdown inside it. This pins the exact wire
// format end to end.
#[tokio::test]
async fn test_webhook_payload_is_exact_rendered_message() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/v1/forecast");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "current_weather": {"temperature": 72.1, "windspeed": 5.4},
                "daily": {
                    "time": ["2024-06-01"],
                    "temperature_2m_max": [80.3],
                    "temperature_2m_min": [60.8],
                    "precipitation_probability_max": [75],
                    "weathercode": [61]
                }
            }));
    });

    let expected = "**Daily Weather — 2024-06-01**\n\
                    Now: **72.1°F**, wind **5.4 mph**\n\
                    Today: **Rain**\n\
                    Low **60.8°F** / High **80.3°F**\n\
                    Precipitation possible (max 75%)";

    let hook_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/hook")
            .json_body(serde_json::json!({ "content": expected }));
        then.status(204);
    });

    let config = CliConfig {
        latitude: "40.7128".to_string(),
        longitude: "-74.0060".to_string(),
        webhook_url: server.url("/hook"),
        api_endpoint: server.url("/v1/forecast"),
        verbose: false,
    };

    let pipeline = WeatherPipeline::new(config)?;
    BotEngine::new(pipeline).run().await?;

    hook_mock.assert();
    Ok(())
}
