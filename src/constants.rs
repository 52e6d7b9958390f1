/// User agent string for HTTP requests
pub const USER_AGENT: &str = "nws-mcp-server/0.1.0";

/// National Weather Service API base URL
pub const NWS_API_BASE: &str = "https://api.weather.gov";

/// Media type the NWS API serves and expects in the `Accept` header
pub const GEO_JSON: &str = "application/geo+json";
