//! Text-to-speech provider trait.

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;

use super::types::SynthesisRequest;
use crate::error::TtsError;

/// Finite, forward-only sequence of audio chunks in arrival order.
pub type AudioChunkStream = BoxStream<'static, Result<Bytes, TtsError>>;

/// Trait for remote text-to-speech providers.
#[async_trait]
pub trait SpeechProvider: Send + Sync {
    /// Start synthesis and return the audio as a chunk stream.
    ///
    /// Errors that happen before the first byte (transport, auth, HTTP
    /// status) are returned directly; later failures arrive as stream items.
    async fn stream_speech(&self, request: &SynthesisRequest) -> Result<AudioChunkStream, TtsError>;
}
