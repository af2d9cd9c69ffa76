//! Tool system: schemas, argument handling, the speech tools and the
//! registry that exposes them.

pub mod arguments;
pub mod registry;
pub mod speech;
pub mod tool;
pub mod types;
pub mod validation;

pub use arguments::ToolArguments;
pub use registry::ToolRegistry;
pub use speech::{available_models, speech_tools, SpeechService};
pub use tool::{FnTool, Tool};
pub use types::{ToolOutput, ToolParameters};
