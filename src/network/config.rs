use crate::constants::DEFAULT_API_BASE_URL;

/// API route configuration.
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Resolve the backend base address from the `API_BASE_URL` environment
    /// variable injected at build time, falling back to the literal local
    /// development address when unset.
    pub fn from_env() -> Self {
        match option_env!("API_BASE_URL") {
            Some(url) => Self::from_url(url),
            None => Self::default(),
        }
    }

    /// Create a new ApiConfig from a URL string.
    pub fn from_url(url: &str) -> Self {
        Self {
            base_url: url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL for all API calls, no trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a given path.
    #[allow(dead_code)]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalised() {
        let config = ApiConfig::from_url("http://localhost:8000/");
        assert_eq!(config.base_url(), "http://localhost:8000");
        assert_eq!(config.url("/results"), "http://localhost:8000/results");
    }
}
