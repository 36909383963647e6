//! Server configuration loaded from environment variables.

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables. A missing
/// `GEMINI_API_KEY` is a valid, handled state (every request answers
/// with the static fallback), never a startup failure.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Gemini API credential. `None` puts the service in fallback-only mode.
    pub gemini_api_key: Option<String>,
    /// Gemini model identifier (default: `gemini-2.5-flash`).
    pub gemini_model: String,
    /// Gemini API base URL, overridable for tests and proxies.
    pub gemini_base_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                     |
    /// |------------------------|---------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                   |
    /// | `PORT`                 | `5000`                                      |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`                     |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                        |
    /// | `GEMINI_API_KEY`       | unset (fallback-only mode)                  |
    /// | `GEMINI_MODEL`         | `gemini-2.5-flash`                          |
    /// | `GEMINI_BASE_URL`      | `https://generativelanguage.googleapis.com` |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        let gemini_model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".into());

        let gemini_base_url = std::env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| enhancer_gemini::api::DEFAULT_BASE_URL.into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            gemini_api_key,
            gemini_model,
            gemini_base_url,
        }
    }
}
