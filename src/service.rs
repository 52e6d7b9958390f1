use anyhow::Result;
use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use std::sync::Arc;

use crate::client::NwsClient;
use crate::error::WeatherError;
use crate::formatters::{format_alerts, format_forecast};
use crate::models::{GetAlertsRequest, GetForecastRequest};

/// Main weather service that handles MCP requests
#[derive(Clone)]
pub struct Weather {
    client: Arc<NwsClient>,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a new Weather service instance
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: Arc::new(NwsClient::new()?),
            tool_router: Self::tool_router(),
        })
    }

    /// Two-step lookup: point metadata names the forecast URL, then that
    /// URL is fetched and rendered.
    async fn fetch_forecast(&self, latitude: f64, longitude: f64) -> Result<String, WeatherError> {
        let metadata = self.client.point_metadata(latitude, longitude).await?;
        let forecast_url = metadata
            .forecast_url()
            .ok_or(WeatherError::MissingForecastUrl)?;

        let forecast = self.client.forecast(&forecast_url).await?;
        Ok(format_forecast(&forecast.into_periods()))
    }

    async fn fetch_alerts(&self, state: &str) -> Result<String, WeatherError> {
        let alerts = self.client.active_alerts(state).await?;
        Ok(format_alerts(&alerts.features))
    }
}

/// Every failure becomes text in the tool reply; nothing propagates past
/// the tool boundary as an error.
fn forecast_reply(result: Result<String, WeatherError>) -> String {
    result.unwrap_or_else(|e| format!("Error fetching forecast: {}", e))
}

fn alerts_reply(result: Result<String, WeatherError>) -> String {
    result.unwrap_or_else(|e| format!("Failed to fetch alerts: {}", e))
}

#[tool_router]
impl Weather {
    #[tool(description = "Get weather forecast for a specific latitude/longitude")]
    async fn get_forecast(
        &self,
        Parameters(request): Parameters<GetForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting forecast for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        let result = self
            .fetch_forecast(request.latitude, request.longitude)
            .await;

        Ok(CallToolResult::success(vec![Content::text(
            forecast_reply(result),
        )]))
    }

    #[tool(description = "Get weather alerts for a US state")]
    async fn get_alerts(
        &self,
        Parameters(request): Parameters<GetAlertsRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting alerts for state: {}", request.state);

        let result = self.fetch_alerts(&request.state).await;

        Ok(CallToolResult::success(vec![Content::text(alerts_reply(
            result,
        ))]))
    }
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "nws-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Read-only weather tools backed by the National Weather Service API. \
                Provides forecasts by coordinate and active alerts by US state."
                    .to_string(),
            ),
        }
    }
}
