use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Point Metadata Models
// ============================================================================

/// Response of `GET /points/{lat},{lon}`. The whole `properties` object
/// can be missing for coordinates the grid system does not cover.
#[derive(Debug, Deserialize)]
pub struct PointsResponse {
    #[serde(default)]
    pub properties: Option<PointsProperties>,
}

#[derive(Debug, Deserialize)]
pub struct PointsProperties {
    #[serde(default)]
    pub forecast: Option<String>,
}

impl PointsResponse {
    /// The forecast URL named by the metadata, if upstream provided one.
    pub fn forecast_url(self) -> Option<String> {
        self.properties.and_then(|p| p.forecast)
    }
}

// ============================================================================
// Forecast Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub properties: Option<ForecastProperties>,
}

#[derive(Debug, Deserialize)]
pub struct ForecastProperties {
    #[serde(default)]
    pub periods: Vec<ForecastPeriod>,
}

impl ForecastResponse {
    /// Periods in upstream order; an absent `properties.periods` is an
    /// empty forecast, not an error.
    pub fn into_periods(self) -> Vec<ForecastPeriod> {
        self.properties.map(|p| p.periods).unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub struct ForecastPeriod {
    pub name: String,
    // Upstream key is lowercase "temperature"; unit is Fahrenheit.
    pub temperature: i64,
    #[serde(rename = "windSpeed")]
    pub wind_speed: String,
    #[serde(rename = "windDirection")]
    pub wind_direction: String,
    #[serde(rename = "detailedForecast")]
    pub detailed_forecast: String,
}

// ============================================================================
// Alert Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AlertResponse {
    #[serde(default)]
    pub features: Vec<AlertFeature>,
}

#[derive(Debug, Deserialize)]
pub struct AlertFeature {
    pub properties: AlertProperties,
}

#[derive(Debug, Deserialize)]
pub struct AlertProperties {
    pub event: String,
    #[serde(rename = "areaDesc")]
    pub area_desc: String,
    pub severity: String,
    pub description: String,
    #[serde(default)]
    pub instruction: Option<String>,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetForecastRequest {
    /// Latitude of the location
    pub latitude: f64,
    /// Longitude of the location
    pub longitude: f64,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetAlertsRequest {
    /// Two-letter US state code (e.g. CA, NY)
    pub state: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_response_yields_forecast_url() {
        let json = r#"{"properties": {"forecast": "https://api.weather.gov/gridpoints/TOP/32,81/forecast"}}"#;
        let points: PointsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            points.forecast_url().as_deref(),
            Some("https://api.weather.gov/gridpoints/TOP/32,81/forecast")
        );
    }

    #[test]
    fn points_response_without_forecast_field() {
        let points: PointsResponse =
            serde_json::from_str(r#"{"properties": {"gridId": "TOP"}}"#).unwrap();
        assert!(points.forecast_url().is_none());
    }

    #[test]
    fn points_response_without_properties() {
        let points: PointsResponse = serde_json::from_str("{}").unwrap();
        assert!(points.forecast_url().is_none());
    }

    // Pins the lowercase upstream key; reading a capitalized "Temperature"
    // key would leave every period without a temperature.
    #[test]
    fn period_temperature_uses_lowercase_key() {
        let json = r#"{
            "name": "Tonight",
            "temperature": 45,
            "windSpeed": "5 mph",
            "windDirection": "NW",
            "detailedForecast": "Clear."
        }"#;
        let period: ForecastPeriod = serde_json::from_str(json).unwrap();
        assert_eq!(period.temperature, 45);
    }

    #[test]
    fn forecast_response_without_periods_is_empty() {
        let forecast: ForecastResponse =
            serde_json::from_str(r#"{"properties": {}}"#).unwrap();
        assert!(forecast.into_periods().is_empty());
    }

    #[test]
    fn alert_response_without_features_is_empty() {
        let alerts: AlertResponse = serde_json::from_str("{}").unwrap();
        assert!(alerts.features.is_empty());
    }

    #[test]
    fn alert_instruction_may_be_null() {
        let json = r#"{
            "features": [{
                "properties": {
                    "event": "Flood Warning",
                    "areaDesc": "Sacramento County",
                    "severity": "Severe",
                    "description": "Flooding is occurring.",
                    "instruction": null
                }
            }]
        }"#;
        let alerts: AlertResponse = serde_json::from_str(json).unwrap();
        assert!(alerts.features[0].properties.instruction.is_none());
    }
}
