//! Hook output written to stdout.

use serde::{Deserialize, Serialize};

/// Result payload the host reads from stdout.
///
/// Cursor's hook protocol expects a single JSON object; `action` is always
/// `"continue"` for these hooks (they never block the prompt flow), and
/// `context` carries text the host merges into the model's context window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookOutput {
    pub action: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl HookOutput {
    /// A plain continue with no context modification.
    pub fn continue_() -> Self {
        Self {
            action: "continue".to_string(),
            context: None,
        }
    }

    /// Attach a context block for the host to inject.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Write the output as one JSON line on stdout.
    pub fn write_stdout(&self) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string(self)?);
        Ok(())
    }
}
