//! Destination path resolution for synthesized audio.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use super::types::AudioFormat;
use crate::error::{Result, TtsError};

const GENERATED_FILE_PREFIX: &str = "tts_output_";
const TEXT_DIGEST_BYTES: usize = 8;

/// Where one synthesis result is written. Computed per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    path: PathBuf,
    format: AudioFormat,
}

impl OutputTarget {
    /// Resolve against the platform temp directory when no path is given.
    pub fn resolve(requested: Option<&str>, text: &str, format: AudioFormat) -> Self {
        Self::resolve_in(requested, &std::env::temp_dir(), text, format)
    }

    /// Resolve with an explicit fallback directory.
    ///
    /// A requested path that does not already end in `.{format}` gets the
    /// suffix appended, so `a.wav` requested as mp3 becomes `a.wav.mp3`.
    pub fn resolve_in(
        requested: Option<&str>,
        fallback_dir: &Path,
        text: &str,
        format: AudioFormat,
    ) -> Self {
        let extension = format.extension();
        let path = match requested.filter(|p| !p.is_empty()) {
            Some(requested) => {
                let suffix = format!(".{extension}");
                if requested.ends_with(&suffix) {
                    PathBuf::from(requested)
                } else {
                    PathBuf::from(format!("{requested}{suffix}"))
                }
            }
            None => fallback_dir.join(format!(
                "{GENERATED_FILE_PREFIX}{}.{extension}",
                text_digest(text)
            )),
        };
        Self { path, format }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> AudioFormat {
        self.format
    }

    /// Create the parent directory (and intermediates) if missing.
    pub async fn ensure_parent_dir(&self) -> Result<()> {
        let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) else {
            return Ok(());
        };
        if tokio::fs::try_exists(parent).await.unwrap_or(false) {
            return Ok(());
        }
        tracing::debug!(dir = %parent.display(), "creating output directory");
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| TtsError::Path {
                path: parent.to_path_buf(),
                source,
            })
    }
}

/// Stable short hex digest of the input text, so identical text maps to the
/// same generated file name.
fn text_digest(text: &str) -> String {
    Sha256::digest(text.as_bytes())
        .iter()
        .take(TEXT_DIGEST_BYTES)
        .map(|byte| format!("{byte:02x}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_suffix_is_appended() {
        let target = OutputTarget::resolve(Some("audio"), "hi", AudioFormat::Wav);
        assert_eq!(target.path(), Path::new("audio.wav"));
    }

    #[test]
    fn other_extension_is_not_replaced() {
        let target = OutputTarget::resolve(Some("a.wav"), "hi", AudioFormat::Mp3);
        assert_eq!(target.path(), Path::new("a.wav.mp3"));
    }

    #[test]
    fn matching_suffix_is_kept() {
        let target = OutputTarget::resolve(Some("out/speech.pcm"), "hi", AudioFormat::Pcm);
        assert_eq!(target.path(), Path::new("out/speech.pcm"));
        assert_eq!(target.format(), AudioFormat::Pcm);
    }

    #[test]
    fn suffix_match_is_case_sensitive() {
        let target = OutputTarget::resolve(Some("SPEECH.MP3"), "hi", AudioFormat::Mp3);
        assert_eq!(target.path(), Path::new("SPEECH.MP3.mp3"));
    }

    #[test]
    fn generated_name_is_deterministic_per_text() {
        let dir = Path::new("/tmp/tts");
        let first = OutputTarget::resolve_in(None, dir, "same text", AudioFormat::Mp3);
        let second = OutputTarget::resolve_in(None, dir, "same text", AudioFormat::Mp3);
        let other = OutputTarget::resolve_in(None, dir, "other text", AudioFormat::Mp3);
        assert_eq!(first, second);
        assert_ne!(first, other);

        let name = first.path().file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("tts_output_"));
        assert!(name.ends_with(".mp3"));
        assert_eq!(name.len(), "tts_output_".len() + 16 + ".mp3".len());
    }

    #[test]
    fn empty_requested_path_falls_back_to_generated_name() {
        let target = OutputTarget::resolve_in(Some(""), Path::new("/tmp"), "hi", AudioFormat::Wav);
        assert!(target.path().starts_with("/tmp"));
        assert_eq!(target.path().extension().unwrap(), "wav");
    }

    #[test]
    fn default_resolution_uses_temp_dir() {
        let target = OutputTarget::resolve(None, "hi", AudioFormat::Mp3);
        assert!(target.path().starts_with(std::env::temp_dir()));
    }

    #[tokio::test]
    async fn ensure_parent_dir_creates_nested_directories() {
        let dir = TempDir::new().unwrap();
        let requested = dir.path().join("a/b/c/out");
        let target = OutputTarget::resolve(requested.to_str(), "hi", AudioFormat::Mp3);

        target.ensure_parent_dir().await.unwrap();

        assert!(dir.path().join("a/b/c").is_dir());
        target.ensure_parent_dir().await.unwrap();
    }

    #[tokio::test]
    async fn ensure_parent_dir_reports_blocked_path() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"x").unwrap();
        let requested = blocker.join("nested/out");
        let target = OutputTarget::resolve(requested.to_str(), "hi", AudioFormat::Mp3);

        let err = target.ensure_parent_dir().await.unwrap_err();

        assert!(matches!(err, TtsError::Path { ref path, .. } if path.ends_with("nested")));
    }

    #[tokio::test]
    async fn bare_file_name_needs_no_directory() {
        let target = OutputTarget::resolve(Some("speech"), "hi", AudioFormat::Mp3);
        target.ensure_parent_dir().await.unwrap();
    }
}
