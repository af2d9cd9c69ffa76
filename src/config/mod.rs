//! Process-wide synthesis context (credential + default voice model).
//!
//! Resolution order: explicit `with_*` overrides > environment > `.env` file.

use std::fmt;

pub const API_KEY_ENV: &str = "API_KEY";
pub const MODEL_ID_ENV: &str = "MODEL_ID";
pub const BASE_URL_ENV: &str = "FISH_AUDIO_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "https://api.fish.audio";

const API_KEY_PREFIX_CHARS: usize = 8;

/// Read-only context shared by every tool invocation.
///
/// Missing values are kept as `None`; the remote API rejects such requests
/// at call time.
#[derive(Clone, PartialEq, Eq)]
pub struct SpeechContext {
    api_key: Option<String>,
    default_model_id: Option<String>,
    base_url: String,
}

impl fmt::Debug for SpeechContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpeechContext")
            .field("api_key", &self.api_key_prefix())
            .field("default_model_id", &self.default_model_id)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Default for SpeechContext {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl SpeechContext {
    pub fn new(api_key: Option<String>, default_model_id: Option<String>) -> Self {
        Self {
            api_key: non_empty(api_key),
            default_model_id: non_empty(default_model_id),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Load from environment variables (`API_KEY`, `MODEL_ID`,
    /// `FISH_AUDIO_BASE_URL`), reading `.env` first when present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_current_env()
    }

    /// Load from the process environment only.
    pub fn from_current_env() -> Self {
        let context = Self::new(
            std::env::var(API_KEY_ENV).ok(),
            std::env::var(MODEL_ID_ENV).ok(),
        );
        match non_empty(std::env::var(BASE_URL_ENV).ok()) {
            Some(url) => context.with_base_url(url),
            None => context,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn default_model_id(&self) -> Option<&str> {
        self.default_model_id.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// First eight characters of the credential followed by `...`.
    pub fn api_key_prefix(&self) -> Option<String> {
        self.api_key.as_deref().map(|key| {
            let prefix: String = key.chars().take(API_KEY_PREFIX_CHARS).collect();
            format!("{prefix}...")
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
