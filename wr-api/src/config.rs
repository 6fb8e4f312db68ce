//! Gateway configuration.

/// Used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Environment variable holding the API base URL. Read at compile time for
/// the WASM pages and at run time by the CLI.
pub const BASE_URL_ENV: &str = "WEATHER_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash, e.g. `https://example.org/api`
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self::from_value(Some(base_url))
    }

    /// Blank or missing values fall back to [`DEFAULT_BASE_URL`].
    pub fn from_value(value: Option<&str>) -> Self {
        let base_url = value
            .map(|v| v.trim().trim_end_matches('/'))
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_BASE_URL);
        Self {
            base_url: base_url.to_string(),
        }
    }

    /// Configuration baked in when the crate was compiled.
    pub fn from_build_env() -> Self {
        Self::from_value(option_env!("WEATHER_API_URL"))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_value(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values_use_default() {
        assert_eq!(ApiConfig::from_value(None).base_url, DEFAULT_BASE_URL);
        assert_eq!(ApiConfig::from_value(Some("  ")).base_url, DEFAULT_BASE_URL);
        assert_eq!(ApiConfig::default().base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        assert_eq!(
            ApiConfig::new("https://weather.example.org/api/").base_url,
            "https://weather.example.org/api"
        );
    }
}
