/// Backend used when `RESTAURANT_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Where the reservation backend lives. Provided to the component tree
/// through Leptos context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL for an `/api/...` path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(option_env!("RESTAURANT_API_URL").unwrap_or(DEFAULT_API_URL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slashes() {
        let config = ApiConfig::new("http://api.local:3000/");
        assert_eq!(config.endpoint("reservas"), "http://api.local:3000/api/reservas");
        assert_eq!(
            config.endpoint("/restaurantes/abc"),
            "http://api.local:3000/api/restaurantes/abc"
        );
    }
}
