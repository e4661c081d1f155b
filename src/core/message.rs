use crate::core::condition::ConditionLabel;
use crate::domain::model::ForecastRecord;

/// Renders the fixed five-line summary. Pure: identical records produce
/// byte-identical output. Missing numeric fields are passed through as a
/// visible `null` placeholder instead of being dressed up; the scheduler's
/// channel is the place to notice a degraded upstream response.
pub fn render(record: &ForecastRecord) -> String {
    let condition = ConditionLabel::for_code(record.weather_code);

    format!(
        "**Daily Weather — {date}**\n\
         Now: **{now}°F**, wind **{wind} mph**\n\
         Today: **{condition}**\n\
         Low **{low}°F** / High **{high}°F**\n\
         {precip}",
        date = record.date,
        now = placeholder_f64(record.current_temperature),
        wind = placeholder_f64(record.current_wind_speed),
        condition = condition,
        low = placeholder_f64(record.low),
        high = placeholder_f64(record.high),
        precip = precipitation_clause(record.precipitation_probability),
    )
}

/// Probability under 30% reads as unlikely; anything else, including an
/// absent value, falls into the "possible" branch. The absent case renders
/// its placeholder as-is, matching long-standing behavior.
pub fn precipitation_clause(probability: Option<i64>) -> String {
    match probability {
        Some(p) if p < 30 => "Precipitation unlikely".to_string(),
        Some(p) => format!("Precipitation possible (max {}%)", p),
        None => "Precipitation possible (max null%)".to_string(),
    }
}

fn placeholder_f64(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "null".to_string(),
    }
}
