//! Draining a chunk stream into the output file.

use futures::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use super::output::OutputTarget;
use super::tts::{AudioChunkStream, SpeechProvider};
use super::types::SynthesisRequest;
use crate::error::{Result, TtsError};

/// Create (or truncate) the destination file.
pub async fn open_destination(target: &OutputTarget) -> Result<File> {
    File::create(target.path())
        .await
        .map_err(|source| write_error(target, source))
}

/// Write every chunk to `file` in arrival order and return the byte count.
///
/// On failure the partial file stays on disk.
pub async fn drain_into(
    mut file: File,
    mut chunks: AudioChunkStream,
    target: &OutputTarget,
) -> Result<u64> {
    let mut written = 0u64;
    while let Some(chunk) = chunks.next().await {
        let chunk = chunk?;
        file.write_all(&chunk)
            .await
            .map_err(|source| write_error(target, source))?;
        written += chunk.len() as u64;
    }
    file.flush()
        .await
        .map_err(|source| write_error(target, source))?;

    Ok(written)
}

/// Open `target` and drain `chunks` into it.
pub async fn write_stream(chunks: AudioChunkStream, target: &OutputTarget) -> Result<u64> {
    let file = open_destination(target).await?;
    drain_into(file, chunks, target).await
}

/// Run one synthesis end to end: prepare the directory, open the
/// destination, start the remote call, stream the body to disk.
///
/// The destination exists before the request is sent; a rejected request
/// leaves it empty.
pub async fn synthesize_to_file(
    provider: &dyn SpeechProvider,
    request: &SynthesisRequest,
    target: &OutputTarget,
) -> Result<u64> {
    target.ensure_parent_dir().await?;
    let file = open_destination(target).await?;
    let chunks = provider.stream_speech(request).await?;
    let written = drain_into(file, chunks, target).await?;
    tracing::info!(
        path = %target.path().display(),
        format = %target.format(),
        bytes = written,
        "speech written"
    );
    Ok(written)
}

fn write_error(target: &OutputTarget, source: std::io::Error) -> TtsError {
    TtsError::Write {
        path: target.path().to_path_buf(),
        source,
    }
}
