//! The speech tools: basic and advanced synthesis plus the two model queries.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;

use super::arguments::ToolArguments;
use super::tool::{FnTool, Tool};
use super::types::{ToolOutput, ToolParameters};
use crate::audio::request::{CHUNK_LENGTH_RANGE, DEFAULT_CHUNK_LENGTH};
use crate::audio::{
    synthesize_to_file, ModelDescriptor, ModelInfo, OutputTarget, SpeechOptions, SpeechProvider,
    SynthesisRequest,
};
use crate::config::SpeechContext;
use crate::error::Result;

pub const TEXT_TO_SPEECH: &str = "text_to_speech";
pub const ADVANCED_TEXT_TO_SPEECH: &str = "advanced_text_to_speech";
pub const GET_MODEL_INFO: &str = "get_model_info";
pub const GET_AVAILABLE_MODELS: &str = "get_available_models";

/// Synthesis operations bound to one context and provider.
#[derive(Clone)]
pub struct SpeechService {
    context: Arc<SpeechContext>,
    provider: Arc<dyn SpeechProvider>,
    fallback_dir: PathBuf,
}

impl std::fmt::Debug for SpeechService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechService")
            .field("context", &self.context)
            .field("fallback_dir", &self.fallback_dir)
            .finish()
    }
}

impl SpeechService {
    pub fn new(context: Arc<SpeechContext>, provider: Arc<dyn SpeechProvider>) -> Self {
        Self {
            context,
            provider,
            fallback_dir: std::env::temp_dir(),
        }
    }

    /// Directory for generated file names when the caller gives no path.
    pub fn with_fallback_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fallback_dir = dir.into();
        self
    }

    pub fn context(&self) -> &SpeechContext {
        &self.context
    }

    /// Synthesize with default settings and return the written path.
    pub async fn text_to_speech(&self, text: &str, output_path: Option<&str>) -> Result<PathBuf> {
        tracing::debug!(tool = TEXT_TO_SPEECH, "validating");
        let request = SynthesisRequest::basic(text, &self.context)?;
        self.synthesize(&request, output_path).await
    }

    /// Synthesize with caller overrides and return the written path.
    pub async fn advanced_text_to_speech(
        &self,
        text: &str,
        output_path: Option<&str>,
        options: &SpeechOptions,
    ) -> Result<PathBuf> {
        tracing::debug!(tool = ADVANCED_TEXT_TO_SPEECH, ?options, "validating");
        let request = SynthesisRequest::advanced(text, options, &self.context)?;
        self.synthesize(&request, output_path).await
    }

    /// Configured model id and redacted credential.
    pub fn model_info(&self) -> ModelInfo {
        ModelInfo {
            model_id: self.context.default_model_id().map(ToString::to_string),
            api_key_prefix: self.context.api_key_prefix(),
        }
    }

    async fn synthesize(
        &self,
        request: &SynthesisRequest,
        output_path: Option<&str>,
    ) -> Result<PathBuf> {
        let target =
            OutputTarget::resolve_in(output_path, &self.fallback_dir, &request.text, request.format);
        tracing::debug!(path = %target.path().display(), "synthesizing");
        synthesize_to_file(self.provider.as_ref(), request, &target).await?;
        Ok(target.path().to_path_buf())
    }
}

/// The fixed voice model catalog.
pub fn available_models() -> Vec<ModelDescriptor> {
    [
        ("Fish Speech 1.5", "speech-1.5", "Base text-to-speech model"),
        ("Fish Speech 1.6", "speech-1.6", "Advanced text-to-speech model"),
        ("Agent X0", "agent-x0", "Text-to-speech model for specialized scenarios"),
    ]
    .into_iter()
    .map(|(name, id, description)| ModelDescriptor {
        name: name.to_string(),
        id: id.to_string(),
        description: description.to_string(),
    })
    .collect()
}

/// Success message carrying the output path.
pub fn generated_message(path: &Path) -> String {
    format!("Speech file generated: {}", path.display())
}

#[derive(Debug, Deserialize)]
struct SynthesisArgs {
    #[serde(default)]
    text: String,
    #[serde(default)]
    output_path: Option<String>,
}

/// Build all four speech tools.
pub fn speech_tools(service: SpeechService) -> Vec<Arc<dyn Tool>> {
    vec![
        text_to_speech_tool(service.clone()),
        advanced_text_to_speech_tool(service.clone()),
        model_info_tool(service),
        available_models_tool(),
    ]
}

fn text_to_speech_tool(service: SpeechService) -> Arc<dyn Tool> {
    Arc::new(FnTool::new(
        TEXT_TO_SPEECH,
        "Convert text to speech with default settings (mp3, 128 kbps). \
         Returns the path of the generated audio file.",
        ToolParameters::object()
            .string("text", "Text to synthesize", true)
            .string(
                "output_path",
                "Output file path; a temporary file is used when omitted",
                false,
            )
            .build(),
        move |args: ToolArguments| {
            let service = service.clone();
            async move {
                let parsed: SynthesisArgs = args.deserialize()?;
                let path = service
                    .text_to_speech(&parsed.text, parsed.output_path.as_deref())
                    .await?;
                Ok(ToolOutput::Text(generated_message(&path)))
            }
        },
    ))
}

fn advanced_text_to_speech_tool(service: SpeechService) -> Arc<dyn Tool> {
    Arc::new(FnTool::new(
        ADVANCED_TEXT_TO_SPEECH,
        "Convert text to speech with full control over format, bitrate, chunking, \
         normalization and latency. Returns the path of the generated audio file.",
        ToolParameters::object()
            .string("text", "Text to synthesize", true)
            .string(
                "output_path",
                "Output file path; the format extension is appended when missing",
                false,
            )
            .string_enum("format", "Output audio format", &["mp3", "wav", "pcm"], "mp3")
            .integer_enum("mp3_bitrate", "MP3 bitrate in kbps", &[64, 128, 192], 128)
            .integer_range(
                "chunk_length",
                "Chunk length used by the synthesizer",
                *CHUNK_LENGTH_RANGE.start(),
                *CHUNK_LENGTH_RANGE.end(),
                i64::from(DEFAULT_CHUNK_LENGTH),
            )
            .boolean("normalize", "Normalize text before synthesis", true)
            .string_enum("latency", "Latency mode", &["normal", "balanced"], "normal")
            .build(),
        move |args: ToolArguments| {
            let service = service.clone();
            async move {
                let parsed: SynthesisArgs = args.deserialize()?;
                let options: SpeechOptions = args.deserialize()?;
                let path = service
                    .advanced_text_to_speech(&parsed.text, parsed.output_path.as_deref(), &options)
                    .await?;
                Ok(ToolOutput::Text(generated_message(&path)))
            }
        },
    ))
}

fn model_info_tool(service: SpeechService) -> Arc<dyn Tool> {
    Arc::new(FnTool::new(
        GET_MODEL_INFO,
        "Show the configured voice model id and the API key prefix",
        ToolParameters::empty(),
        move |_args: ToolArguments| {
            let info = service.model_info();
            async move { Ok(ToolOutput::Json(serde_json::to_value(info)?)) }
        },
    ))
}

fn available_models_tool() -> Arc<dyn Tool> {
    Arc::new(FnTool::new(
        GET_AVAILABLE_MODELS,
        "List the available voice models",
        ToolParameters::empty(),
        |_args: ToolArguments| async move {
            Ok(ToolOutput::Json(serde_json::to_value(available_models())?))
        },
    ))
}
