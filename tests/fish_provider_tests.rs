use fishtts::audio::{
    write_stream, AudioFormat, FishAudioProvider, LatencyMode, Mp3Bitrate, OutputTarget,
    SpeechProvider, SynthesisRequest,
};
use fishtts::error::TtsError;
use futures::StreamExt;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn synthesis_request() -> SynthesisRequest {
    SynthesisRequest {
        text: "hello world".to_string(),
        reference_id: Some("voice-42".to_string()),
        format: AudioFormat::Wav,
        mp3_bitrate: Mp3Bitrate::Kbps192,
        chunk_length: 250,
        normalize: false,
        latency: LatencyMode::Balanced,
    }
}

async fn collect(provider: &FishAudioProvider) -> Result<Vec<u8>, TtsError> {
    let mut stream = provider.stream_speech(&synthesis_request()).await?;
    let mut audio = Vec::new();
    while let Some(chunk) = stream.next().await {
        audio.extend_from_slice(&chunk?);
    }
    Ok(audio)
}

#[tokio::test]
async fn tts_happy_path_sends_all_request_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/tts"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "text": "hello world",
            "reference_id": "voice-42",
            "format": "wav",
            "mp3_bitrate": 192,
            "chunk_length": 250,
            "normalize": false,
            "latency": "balanced",
            "references": [],
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "audio/wav")
                .set_body_bytes(b"RIFFfakewav".to_vec()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let provider = FishAudioProvider::new_with_base_url(Some("test-key".into()), server.uri());

    let audio = collect(&provider).await.expect("tts should succeed");

    assert_eq!(audio, b"RIFFfakewav");
}

#[tokio::test]
async fn tts_streams_body_into_file() {
    let server = MockServer::start().await;
    let body: Vec<u8> = (0..=255u8).cycle().take(64 * 1024).collect();

    Mock::given(method("POST"))
        .and(path("/v1/tts"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let requested = dir.path().join("speech");
    let target = OutputTarget::resolve(requested.to_str(), "hello world", AudioFormat::Wav);
    let provider = FishAudioProvider::new_with_base_url(Some("test-key".into()), server.uri());

    let stream = provider.stream_speech(&synthesis_request()).await.unwrap();
    let written = write_stream(stream, &target).await.unwrap();

    assert_eq!(written, body.len() as u64);
    assert_eq!(std::fs::read(dir.path().join("speech.wav")).unwrap(), body);
}

#[tokio::test]
async fn tts_unauthorized_maps_to_authentication_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/tts"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"status": 401, "message": "Invalid token"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let provider = FishAudioProvider::new_with_base_url(Some("bad-key".into()), server.uri());

    let err = collect(&provider).await.expect_err("401 should fail");

    assert!(matches!(err, TtsError::Authentication(message) if message == "Invalid token"));
}

#[tokio::test]
async fn tts_missing_key_is_rejected_by_the_api() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/tts"))
        .respond_with(ResponseTemplate::new(401).set_body_string("missing token"))
        .expect(1)
        .mount(&server)
        .await;

    let provider = FishAudioProvider::new_with_base_url(None, server.uri());

    let err = collect(&provider).await.expect_err("unset key should fail");

    assert!(matches!(err, TtsError::Authentication(_)));
}

#[tokio::test]
async fn tts_quota_error_keeps_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/tts"))
        .respond_with(ResponseTemplate::new(402).set_body_string("Insufficient balance"))
        .expect(1)
        .mount(&server)
        .await;

    let provider = FishAudioProvider::new_with_base_url(Some("test-key".into()), server.uri());

    let err = collect(&provider).await.expect_err("402 should fail");

    assert!(matches!(err, TtsError::Api { status: 402, message } if message == "Insufficient balance"));
}

#[tokio::test]
async fn tts_server_errors_are_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/tts"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let provider = FishAudioProvider::new_with_base_url(Some("test-key".into()), server.uri());

    let err = collect(&provider).await.expect_err("503 should fail");

    assert!(matches!(err, TtsError::Api { status: 503, .. }));
}

#[tokio::test]
async fn tts_unreachable_host_is_a_network_error() {
    let provider =
        FishAudioProvider::new_with_base_url(Some("test-key".into()), "http://127.0.0.1:1");

    let err = collect(&provider).await.expect_err("connect should fail");

    assert!(matches!(err, TtsError::Network(_)));
}
