use reqwest::StatusCode;

/// Failures a weather lookup can hit, in the order the pipeline can
/// produce them: transport, status check, body decode, then a metadata
/// response that simply has no forecast URL to follow.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request failed with status: {0}")]
    Status(StatusCode),

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("point metadata has no forecast URL")]
    MissingForecastUrl,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_the_code() {
        let err = WeatherError::Status(StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "request failed with status: 404 Not Found");
    }

    #[test]
    fn decode_error_wraps_serde_message() {
        let cause = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = WeatherError::from(cause);
        assert!(err.to_string().starts_with("unexpected response body: "));
    }
}
