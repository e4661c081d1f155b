use crate::domain::model::ForecastRecord;
use crate::utils::error::{Result, WeatherBotError};
use chrono::Utc;
use serde::Deserialize;

/// Open-Meteo `/v1/forecast` response, limited to the fields we request.
/// Every key is optional; the API omits blocks that were not asked for and
/// degraded responses may drop individual arrays.
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub current_weather: Option<CurrentWeather>,
    pub daily: Option<DailySeries>,
}

#[derive(Debug, Deserialize)]
pub struct CurrentWeather {
    pub temperature: Option<f64>,
    pub windspeed: Option<f64>,
}

/// Parallel arrays, one entry per forecast day, index 0 being "today".
#[derive(Debug, Deserialize)]
pub struct DailySeries {
    pub time: Option<Vec<String>>,
    pub temperature_2m_max: Option<Vec<Option<f64>>>,
    pub temperature_2m_min: Option<Vec<Option<f64>>>,
    pub precipitation_probability_max: Option<Vec<Option<i64>>>,
    pub weathercode: Option<Vec<Option<i64>>>,
}

impl ForecastResponse {
    /// Extracts today's record. A missing array degrades the matching field
    /// to `None`; an array that is present but empty means the API returned
    /// no daily forecast at all, which rendering cannot recover from.
    pub fn into_today(self) -> Result<ForecastRecord> {
        let (current_temperature, current_wind_speed) = match self.current_weather {
            Some(current) => (current.temperature, current.windspeed),
            None => (None, None),
        };

        let daily = self.daily.unwrap_or(DailySeries {
            time: None,
            temperature_2m_max: None,
            temperature_2m_min: None,
            precipitation_probability_max: None,
            weathercode: None,
        });

        let date = match daily.time {
            Some(times) => today_entry("time", times)?,
            None => String::new(),
        };

        Ok(ForecastRecord {
            date,
            high: today_value("temperature_2m_max", daily.temperature_2m_max)?,
            low: today_value("temperature_2m_min", daily.temperature_2m_min)?,
            precipitation_probability: today_value(
                "precipitation_probability_max",
                daily.precipitation_probability_max,
            )?,
            weather_code: today_value("weathercode", daily.weathercode)?,
            current_temperature,
            current_wind_speed,
            fetched_at: Utc::now(),
        })
    }
}

fn today_entry<T>(field: &str, mut values: Vec<T>) -> Result<T> {
    if values.is_empty() {
        return Err(WeatherBotError::IncompleteForecast {
            message: format!("daily series `{}` is empty", field),
        });
    }
    Ok(values.swap_remove(0))
}

fn today_value<T>(field: &str, values: Option<Vec<Option<T>>>) -> Result<Option<T>> {
    match values {
        Some(values) => today_entry(field, values),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_body() -> serde_json::Value {
        serde_json::json!({
            "current_weather": {"temperature": 72.1, "windspeed": 5.4, "weathercode": 0},
            "daily": {
                "time": ["2024-06-01", "2024-06-02"],
                "temperature_2m_max": [80.3, 82.0],
                "temperature_2m_min": [60.8, 61.2],
                "precipitation_probability_max": [10, 40],
                "weathercode": [0, 61]
            }
        })
    }

    #[test]
    fn test_extracts_today_from_full_response() {
        let response: ForecastResponse = serde_json::from_value(sample_body()).unwrap();
        let record = response.into_today().unwrap();

        assert_eq!(record.date, "2024-06-01");
        assert_eq!(record.high, Some(80.3));
        assert_eq!(record.low, Some(60.8));
        assert_eq!(record.precipitation_probability, Some(10));
        assert_eq!(record.weather_code, Some(0));
        assert_eq!(record.current_temperature, Some(72.1));
        assert_eq!(record.current_wind_speed, Some(5.4));
    }

    #[test]
    fn test_missing_blocks_degrade_to_none() {
        let response: ForecastResponse = serde_json::from_value(serde_json::json!({
            "daily": {"time": ["2024-06-01"]}
        }))
        .unwrap();
        let record = response.into_today().unwrap();

        assert_eq!(record.date, "2024-06-01");
        assert_eq!(record.high, None);
        assert_eq!(record.low, None);
        assert_eq!(record.precipitation_probability, None);
        assert_eq!(record.weather_code, None);
        assert_eq!(record.current_temperature, None);
        assert_eq!(record.current_wind_speed, None);
    }

    #[test]
    fn test_missing_daily_block_yields_empty_date() {
        let response: ForecastResponse = serde_json::from_value(serde_json::json!({
            "current_weather": {"temperature": 70.0, "windspeed": 3.0}
        }))
        .unwrap();
        let record = response.into_today().unwrap();

        assert_eq!(record.date, "");
        assert_eq!(record.current_temperature, Some(70.0));
    }

    #[test]
    fn test_empty_daily_array_is_incomplete_forecast() {
        let response: ForecastResponse = serde_json::from_value(serde_json::json!({
            "daily": {"time": [], "weathercode": [0]}
        }))
        .unwrap();

        let err = response.into_today().unwrap_err();
        assert!(matches!(
            err,
            WeatherBotError::IncompleteForecast { .. }
        ));
    }

    #[test]
    fn test_empty_value_array_is_incomplete_forecast() {
        let response: ForecastResponse = serde_json::from_value(serde_json::json!({
            "daily": {"time": ["2024-06-01"], "weathercode": []}
        }))
        .unwrap();

        assert!(response.into_today().is_err());
    }

    #[test]
    fn test_null_entries_stay_null() {
        let response: ForecastResponse = serde_json::from_value(serde_json::json!({
            "daily": {
                "time": ["2024-06-01"],
                "precipitation_probability_max": [null],
                "weathercode": [null]
            }
        }))
        .unwrap();
        let record = response.into_today().unwrap();

        assert_eq!(record.precipitation_probability, None);
        assert_eq!(record.weather_code, None);
    }
}
