use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub search: SearchConfig,
}

/// Connection settings for the attendance backend
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL the `/api/...` paths are appended to
    pub base_url: String,
    pub timeout: Duration,
    /// Opaque session cookie forwarded verbatim on every request
    pub session_cookie: Option<String>,
    pub user_agent: String,
}

/// Debounce contract shared by every suggestion widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub debounce: Duration,
    pub min_chars: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            api: ApiConfig::from_env()?,
            search: SearchConfig::from_env()?,
        })
    }
}

impl ApiConfig {
    const DEFAULT_BASE_URL: &'static str = "http://127.0.0.1:8000";
    const DEFAULT_TIMEOUT_SECS: u64 = 30;
    const DEFAULT_USER_AGENT: &'static str = "frequencia-client/0.1";

    pub fn from_env() -> Result<Self, String> {
        let base_url = env::var("FREQUENCIA_API_URL")
            .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(format!(
                "FREQUENCIA_API_URL must start with http:// or https:// (got '{}')",
                base_url
            ));
        }

        let timeout_secs = env::var("HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "HTTP_TIMEOUT_SECS must be a valid number".to_string())?;

        let session_cookie = env::var("FREQUENCIA_SESSION_COOKIE")
            .ok()
            .filter(|s| !s.is_empty());

        let user_agent =
            env::var("HTTP_USER_AGENT").unwrap_or_else(|_| Self::DEFAULT_USER_AGENT.to_string());

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            session_cookie,
            user_agent,
        })
    }

    /// Build a config pointing at an arbitrary base URL with default settings
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
            session_cookie: None,
            user_agent: Self::DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl SearchConfig {
    const DEFAULT_DEBOUNCE_MS: u64 = 300;
    const DEFAULT_MIN_CHARS: usize = 3;

    pub fn from_env() -> Result<Self, String> {
        let debounce_ms = env::var("SEARCH_DEBOUNCE_MS")
            .unwrap_or_else(|_| Self::DEFAULT_DEBOUNCE_MS.to_string())
            .parse::<u64>()
            .map_err(|_| "SEARCH_DEBOUNCE_MS must be a valid number".to_string())?;

        let min_chars = env::var("SEARCH_MIN_CHARS")
            .unwrap_or_else(|_| Self::DEFAULT_MIN_CHARS.to_string())
            .parse::<usize>()
            .map_err(|_| "SEARCH_MIN_CHARS must be a valid number".to_string())?;

        if min_chars == 0 {
            return Err("SEARCH_MIN_CHARS must be at least 1".to_string());
        }

        Ok(Self {
            debounce: Duration::from_millis(debounce_ms),
            min_chars,
        })
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(Self::DEFAULT_DEBOUNCE_MS),
            min_chars: Self::DEFAULT_MIN_CHARS,
        }
    }
}
