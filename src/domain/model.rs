use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geographic point the forecast is requested for. Kept as the decimal
/// strings the configuration supplied; the upstream API does the parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: String,
    pub longitude: String,
}

impl Coordinates {
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }
}

/// Today's forecast, extracted from index 0 of the daily series.
/// Constructed fresh each run and discarded after rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRecord {
    pub date: String,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub precipitation_probability: Option<i64>,
    pub weather_code: Option<i64>,
    pub current_temperature: Option<f64>,
    pub current_wind_speed: Option<f64>,
    pub fetched_at: DateTime<Utc>,
}

/// Invocation result returned to the caller after a successful delivery.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub status: String,
    pub date: String,
    pub location: ReportLocation,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportLocation {
    pub lat: String,
    pub lon: String,
}

impl RunReport {
    pub fn success(date: String, coordinates: &Coordinates) -> Self {
        Self {
            status: "success".to_string(),
            date,
            location: ReportLocation {
                lat: coordinates.latitude.clone(),
                lon: coordinates.longitude.clone(),
            },
        }
    }
}
