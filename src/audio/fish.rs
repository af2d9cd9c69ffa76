//! Fish Audio TTS provider (`/v1/tts`).

use async_trait::async_trait;
use futures::StreamExt;
use serde::Serialize;

use super::tts::{AudioChunkStream, SpeechProvider};
use super::types::{AudioFormat, LatencyMode, SynthesisRequest};
use crate::config::SpeechContext;
use crate::error::TtsError;
use crate::provider::http::{bearer_headers, shared_client, status_to_error, trim_trailing_slash};

/// Streams synthesized audio from the Fish Audio HTTP API.
#[derive(Debug, Clone)]
pub struct FishAudioProvider {
    api_key: Option<String>,
    base_url: String,
}

impl FishAudioProvider {
    pub fn new(api_key: Option<String>) -> Self {
        Self::new_with_base_url(api_key, crate::config::DEFAULT_BASE_URL)
    }

    pub fn new_with_base_url(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into(),
        }
    }

    pub fn from_context(context: &SpeechContext) -> Self {
        Self::new_with_base_url(
            context.api_key().map(ToString::to_string),
            context.base_url(),
        )
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/tts", trim_trailing_slash(&self.base_url))
    }
}

/// Wire body for `/v1/tts`.
#[derive(Debug, Serialize)]
struct FishTtsPayload<'a> {
    text: &'a str,
    references: &'static [serde_json::Value],
    #[serde(skip_serializing_if = "Option::is_none")]
    reference_id: Option<&'a str>,
    format: AudioFormat,
    mp3_bitrate: u32,
    chunk_length: u32,
    normalize: bool,
    latency: LatencyMode,
}

impl<'a> From<&'a SynthesisRequest> for FishTtsPayload<'a> {
    fn from(request: &'a SynthesisRequest) -> Self {
        Self {
            text: &request.text,
            references: &[],
            reference_id: request.reference_id.as_deref(),
            format: request.format,
            mp3_bitrate: request.mp3_bitrate.kbps(),
            chunk_length: request.chunk_length,
            normalize: request.normalize,
            latency: request.latency,
        }
    }
}

#[async_trait]
impl SpeechProvider for FishAudioProvider {
    async fn stream_speech(&self, request: &SynthesisRequest) -> Result<AudioChunkStream, TtsError> {
        // An unset key is still sent; the API answers with 401.
        let headers = bearer_headers(self.api_key.as_deref().unwrap_or_default());
        let payload = FishTtsPayload::from(request);

        tracing::debug!(
            url = %self.endpoint(),
            format = %request.format,
            chunk_length = request.chunk_length,
            latency = %request.latency,
            "sending tts request"
        );

        let response = shared_client()
            .post(self.endpoint())
            .headers(headers)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_to_error(status.as_u16(), &body));
        }

        Ok(response
            .bytes_stream()
            .map(|chunk| chunk.map_err(|e| TtsError::RemoteSynthesis(e.to_string())))
            .boxed())
    }
}
