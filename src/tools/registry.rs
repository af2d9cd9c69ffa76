//! Tool lookup and the result contract seen by callers.
//!
//! Every outcome leaves here as a [`ToolOutput`]; errors are flattened into
//! failure messages and never cross the boundary.

use std::sync::Arc;

use super::arguments::ToolArguments;
use super::tool::Tool;
use super::types::ToolOutput;
use super::validation::validate_arguments;
use crate::error::TtsError;

/// Ordered set of tools addressable by name.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.tools.iter().map(|t| t.name()))
            .finish()
    }
}

impl ToolRegistry {
    pub fn new(tools: Vec<Arc<dyn Tool>>) -> Self {
        Self { tools }
    }

    pub fn tools(&self) -> &[Arc<dyn Tool>] {
        &self.tools
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.iter().find(|tool| tool.name() == name)
    }

    /// Invoke a tool by name. `None` when no tool has that name.
    pub async fn call(&self, name: &str, args: ToolArguments) -> Option<ToolOutput> {
        let tool = self.get(name)?;
        Some(invoke(tool.as_ref(), &args).await)
    }
}

/// Run one tool and flatten its result.
pub async fn invoke(tool: &dyn Tool, args: &ToolArguments) -> ToolOutput {
    let outcome = match validate_arguments(args.raw(), &tool.parameters().schema) {
        Ok(()) => tool.execute(args).await,
        Err(err) => Err(err),
    };
    match outcome {
        Ok(output) => {
            tracing::debug!(tool = tool.name(), "done");
            output
        }
        Err(err) => {
            tracing::warn!(tool = tool.name(), kind = %err.kind(), error = %err, "tool failed");
            ToolOutput::Text(failure_message(&err))
        }
    }
}

/// Caller-facing text for a failed invocation.
///
/// Validation failures are reported as-is; anything that happened after the
/// request was accepted is prefixed so the caller knows synthesis was tried.
pub fn failure_message(err: &TtsError) -> String {
    if err.is_validation() {
        err.to_string()
    } else {
        format!("Speech generation failed: {err}")
    }
}
