use std::env;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TITLE: &str = "Support Dashboard";

/// Credentials and endpoints of the external case-management service.
#[derive(Debug, Clone, Default)]
pub struct UpstreamConfig {
    pub login_url: Option<String>,
    pub document_url: Option<String>,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub title: String,
    pub subtitle: String,
    pub upstream: UpstreamConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            title: DEFAULT_TITLE.to_string(),
            subtitle: String::new(),
            upstream: UpstreamConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = non_empty("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            port,
            title: non_empty("DASHBOARD_TITLE").unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            subtitle: non_empty("DASHBOARD_SUBTITLE").unwrap_or_default(),
            upstream: UpstreamConfig {
                login_url: non_empty("LP_CCS_LOGIN_URL"),
                document_url: non_empty("LP_CCS_GET_URL"),
                username: lookup("LP_USERNAME").unwrap_or_default(),
                password: lookup("LP_PASSWORD").unwrap_or_default(),
            },
        }
    }
}
