//! Wire types for the enhancement endpoint.
//!
//! Shared by the server handler and the terminal client so both sides
//! agree on the JSON shape (camelCase on the wire).

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/enhance`.
///
/// Free-form user text. The server applies no length or content
/// validation; the minimum-length gate lives client-side and is
/// deliberately bypassable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhanceRequest {
    pub idea: String,
}

/// Response body for `POST /api/enhance`.
///
/// A single opaque block of formatted text. Always delivered with
/// HTTP 200, whether it came from the provider or the fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceResponse {
    pub enhanced_prompt: String,
}
