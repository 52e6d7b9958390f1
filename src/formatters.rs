use crate::models::{AlertFeature, ForecastPeriod};

/// Fixed reply for a state with no active alerts.
pub const NO_ACTIVE_ALERTS: &str = "No active alerts for this state";

/// Renders forecast periods into delimited text blocks, one per period,
/// in upstream order. No periods gives an empty string.
pub fn format_forecast(periods: &[ForecastPeriod]) -> String {
    let mut output = String::new();
    for period in periods {
        output.push_str(&format!(
            "\n---\nName: {}\nTemperature: {}F\nWind: {} {}\nForecast: {}\n",
            period.name,
            period.temperature,
            period.wind_speed,
            period.wind_direction,
            period.detailed_forecast
        ));
    }
    output
}

/// Renders active alerts into delimited text blocks, one per feature, in
/// upstream order. A missing instruction renders as an empty value.
pub fn format_alerts(features: &[AlertFeature]) -> String {
    if features.is_empty() {
        return NO_ACTIVE_ALERTS.to_string();
    }

    let mut output = String::new();
    for feature in features {
        let props = &feature.properties;
        output.push_str(&format!(
            "\n---\nEvent: {}\nArea: {}\nSeverity: {}\nDescription: {}\nInstruction: {}\n",
            props.event,
            props.area_desc,
            props.severity,
            props.description,
            props.instruction.as_deref().unwrap_or_default()
        ));
    }
    output
}
