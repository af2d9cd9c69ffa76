//! Speech synthesis pipeline: request building, output resolution, and
//! streaming the remote audio to disk.

pub mod fish;
pub mod output;
pub mod request;
pub mod tts;
pub mod types;
pub mod writer;

pub use fish::FishAudioProvider;
pub use output::OutputTarget;
pub use request::SpeechOptions;
pub use tts::{AudioChunkStream, SpeechProvider};
pub use types::*;
pub use writer::{drain_into, open_destination, synthesize_to_file, write_stream};
