//! fishtts: Fish Audio text-to-speech as MCP tools.
//!
//! Exposes four tools over the Model Context Protocol: basic and advanced
//! synthesis to a file, the configured model info, and the model catalog.
//! Synthesis streams the API response straight to disk.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use fishtts::prelude::*;
//!
//! # async fn example() -> fishtts::error::Result<()> {
//! let context = Arc::new(SpeechContext::from_env());
//! let provider = Arc::new(FishAudioProvider::from_context(&context));
//! let service = SpeechService::new(context, provider);
//! let path = service.text_to_speech("Hello!", None).await?;
//! println!("{}", path.display());
//! # Ok(())
//! # }
//! ```

pub mod audio;
pub mod cli;
pub mod config;
pub mod error;
pub mod mcp;
pub mod prelude;
pub mod provider;
pub mod tools;
