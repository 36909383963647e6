//! Handler for the prompt enhancement endpoint.

use axum::extract::State;
use axum::Json;
use enhancer_core::enhancement::{build_instruction, Enhancement};
use enhancer_core::language;
use enhancer_core::template;
use enhancer_core::types::{EnhanceRequest, EnhanceResponse};

use crate::state::AppState;

/// POST /api/enhance
///
/// Always answers HTTP 200 with an `enhancedPrompt` body. Provider
/// failures (missing credential included) are logged and absorbed into
/// the static fallback -- the caller never sees a distinguishable error
/// status. That degrade-gracefully policy is part of the contract, not
/// an oversight.
pub async fn enhance(
    State(state): State<AppState>,
    Json(input): Json<EnhanceRequest>,
) -> Json<EnhanceResponse> {
    let outcome = enhance_idea(&state, &input.idea).await;

    Json(EnhanceResponse {
        enhanced_prompt: outcome.into_text(),
    })
}

/// Run one enhancement attempt for an idea.
///
/// Detects the target language, makes a single provider call when a
/// client is configured, and falls through to the deterministic
/// template formatter on any failure. No retries.
pub async fn enhance_idea(state: &AppState, idea: &str) -> Enhancement {
    let lang = language::detect(idea);

    if let Some(gemini) = &state.gemini {
        let instruction = build_instruction(idea, lang);
        match gemini.generate_content(&instruction).await {
            Ok(text) => return Enhancement::Provider(text),
            Err(err) => {
                tracing::warn!(error = %err, "Gemini call failed, using structured fallback");
            }
        }
    } else {
        tracing::debug!("No Gemini credential configured, using structured fallback");
    }

    Enhancement::Fallback(template::format_fallback(idea, lang))
}
