//! Model Context Protocol (MCP) server over stdio.

pub mod server;

pub use server::SpeechServer;
