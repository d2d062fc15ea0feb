use serde::{Deserialize, Serialize};

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Raw user text. Required, must not be blank.
    #[serde(default)]
    pub user_query: Option<String>,

    /// Optional tone or extra context for the prompt.
    #[serde(default)]
    pub system_prompt: Option<String>,
}

impl GenerationRequest {
    /// The user query, if present and not blank after trimming.
    pub fn query(&self) -> Option<&str> {
        self.user_query
            .as_deref()
            .filter(|query| !query.trim().is_empty())
    }

    /// The caller's tone, if one was sent. An empty string counts as absent.
    pub fn tone(&self) -> Option<&str> {
        self.system_prompt.as_deref().filter(|tone| !tone.is_empty())
    }
}

/// Successful response of `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub text: String,
}
