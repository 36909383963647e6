use std::sync::Arc;

use enhancer_gemini::GeminiApi;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Gemini client, present only when a credential is configured.
    /// `None` means every request is answered from the static fallback.
    pub gemini: Option<Arc<GeminiApi>>,
}

impl AppState {
    /// Build application state from configuration.
    ///
    /// Constructs the Gemini client iff a credential is present,
    /// mirroring the config's fallback-only contract.
    pub fn from_config(config: ServerConfig) -> Self {
        let gemini = config.gemini_api_key.as_ref().map(|key| {
            Arc::new(GeminiApi::with_base_url(
                config.gemini_base_url.clone(),
                key.clone(),
                config.gemini_model.clone(),
            ))
        });

        Self {
            config: Arc::new(config),
            gemini,
        }
    }
}
