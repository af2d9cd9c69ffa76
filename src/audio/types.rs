//! Audio-related types.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Output audio format. Conversion happens on the API side.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AudioFormat {
    #[default]
    Mp3,
    Wav,
    Pcm,
}

impl AudioFormat {
    /// File extension (without the dot).
    pub fn extension(self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Wav => "wav",
            Self::Pcm => "pcm",
        }
    }
}

/// MP3 bitrate in kbps. Ignored by the API for other formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Mp3Bitrate {
    Kbps64,
    #[default]
    Kbps128,
    Kbps192,
}

impl Mp3Bitrate {
    pub fn kbps(self) -> u32 {
        match self {
            Self::Kbps64 => 64,
            Self::Kbps128 => 128,
            Self::Kbps192 => 192,
        }
    }
}

impl TryFrom<u32> for Mp3Bitrate {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            64 => Ok(Self::Kbps64),
            128 => Ok(Self::Kbps128),
            192 => Ok(Self::Kbps192),
            other => Err(format!("mp3_bitrate must be one of 64, 128, 192; got {other}")),
        }
    }
}

impl From<Mp3Bitrate> for u32 {
    fn from(value: Mp3Bitrate) -> Self {
        value.kbps()
    }
}

/// Latency mode requested from the API.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LatencyMode {
    #[default]
    Normal,
    Balanced,
}

/// A validated synthesis request, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SynthesisRequest {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    pub format: AudioFormat,
    pub mp3_bitrate: Mp3Bitrate,
    pub chunk_length: u32,
    pub normalize: bool,
    pub latency: LatencyMode,
}

/// Entry in the static voice model catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    pub name: String,
    pub id: String,
    pub description: String,
}

/// Configured model and a redacted view of the credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub model_id: Option<String>,
    pub api_key_prefix: Option<String>,
}
