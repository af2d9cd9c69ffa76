//! Building validated [`SynthesisRequest`]s from caller input.

use std::ops::RangeInclusive;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use super::types::{AudioFormat, LatencyMode, Mp3Bitrate, SynthesisRequest};
use crate::config::SpeechContext;
use crate::error::{Result, TtsError};

pub const DEFAULT_CHUNK_LENGTH: u32 = 200;
pub const CHUNK_LENGTH_RANGE: RangeInclusive<i64> = 100..=300;

/// Optional overrides accepted by the advanced synthesis tool.
///
/// `None` falls back to the same defaults the basic tool uses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SpeechOptions {
    #[serde(default)]
    pub format: Option<AudioFormat>,
    #[serde(default, alias = "bitrate")]
    pub mp3_bitrate: Option<Mp3Bitrate>,
    #[serde(default, deserialize_with = "whole_number")]
    pub chunk_length: Option<i128>,
    #[serde(default)]
    pub normalize: Option<bool>,
    #[serde(default)]
    pub latency: Option<LatencyMode>,
}

impl SynthesisRequest {
    /// Request with every tunable at its default (mp3, 128 kbps, chunk 200,
    /// normalized, normal latency).
    pub fn basic(text: &str, context: &SpeechContext) -> Result<Self> {
        Self::advanced(text, &SpeechOptions::default(), context)
    }

    /// Request with caller overrides. The voice reference always comes from
    /// the context.
    pub fn advanced(text: &str, options: &SpeechOptions, context: &SpeechContext) -> Result<Self> {
        if text.is_empty() {
            return Err(TtsError::EmptyInput);
        }

        let chunk_length = match options.chunk_length {
            Some(value) => validate_chunk_length(value)?,
            None => DEFAULT_CHUNK_LENGTH,
        };

        Ok(Self {
            text: text.to_string(),
            reference_id: context.default_model_id().map(ToString::to_string),
            format: options.format.unwrap_or_default(),
            mp3_bitrate: options.mp3_bitrate.unwrap_or_default(),
            chunk_length,
            normalize: options.normalize.unwrap_or(true),
            latency: options.latency.unwrap_or_default(),
        })
    }
}

fn validate_chunk_length(value: i128) -> Result<u32> {
    let (min, max) = (*CHUNK_LENGTH_RANGE.start(), *CHUNK_LENGTH_RANGE.end());
    if value < i128::from(min) || value > i128::from(max) {
        return Err(TtsError::OutOfRange {
            field: "chunk_length",
            min,
            max,
            value,
        });
    }
    u32::try_from(value).map_err(|_| TtsError::InvalidArgument(format!("chunk_length {value}")))
}

/// Any JSON integer, or a float with no fractional part. Magnitude is left
/// to the range check.
fn whole_number<'de, D>(deserializer: D) -> std::result::Result<Option<i128>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<serde_json::Number>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if let Some(value) = number.as_i64() {
        return Ok(Some(i128::from(value)));
    }
    if let Some(value) = number.as_u64() {
        return Ok(Some(i128::from(value)));
    }
    match number.as_f64() {
        Some(value) if value.fract() == 0.0 => Ok(Some(value as i128)),
        _ => Err(D::Error::custom(format!("expected an integer, got {number}"))),
    }
}
