//! Convenience re-exports for common use.

pub use crate::audio::{
    AudioFormat, FishAudioProvider, LatencyMode, ModelDescriptor, ModelInfo, Mp3Bitrate,
    OutputTarget, SpeechOptions, SpeechProvider, SynthesisRequest,
};
pub use crate::config::SpeechContext;
pub use crate::error::{Result, TtsError};
pub use crate::mcp::SpeechServer;
pub use crate::tools::{SpeechService, Tool, ToolArguments, ToolOutput, ToolRegistry};
