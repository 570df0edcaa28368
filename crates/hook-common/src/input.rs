//! Hook input parsing from stdin.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::{self, Read};

/// Main hook input structure received from Cursor.
///
/// Field names vary between Cursor builds: the prompt may arrive as
/// `prompt` or `query`, the transcript as `transcript` or `messages`.
/// Accessors resolve the fallbacks so hooks don't have to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HookInput {
    /// User prompt (beforeSubmitPrompt hooks)
    #[serde(default)]
    pub prompt: Option<String>,

    /// Alternate prompt field
    #[serde(default)]
    pub query: Option<String>,

    /// Conversation transcript (stop hooks)
    #[serde(default)]
    pub transcript: Vec<TranscriptMessage>,

    /// Alternate transcript field
    #[serde(default)]
    pub messages: Vec<TranscriptMessage>,

    /// Conversation identifier
    #[serde(default)]
    pub conversation_id: Option<String>,

    /// Workspace roots, used for .env discovery
    #[serde(default)]
    pub workspace_roots: Vec<String>,

    /// Additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// A single role-tagged message in the conversation transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptMessage {
    #[serde(default)]
    pub role: String,

    #[serde(default)]
    pub content: MessageContent,
}

/// Message content: either a plain string or a list of typed parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

impl Default for MessageContent {
    fn default() -> Self {
        MessageContent::Text(String::new())
    }
}

/// One entry in a part-list message body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentPart {
    Typed {
        #[serde(rename = "type")]
        kind: String,
        #[serde(default)]
        text: String,
    },
    Plain(String),
    Other(serde_json::Value),
}

impl TranscriptMessage {
    /// Flatten the message body to plain text.
    ///
    /// Part lists keep `text`-typed parts and bare strings; anything else
    /// (images, tool results) is dropped.
    pub fn text(&self) -> String {
        match &self.content {
            MessageContent::Text(s) => s.clone(),
            MessageContent::Parts(parts) => {
                let mut pieces = Vec::new();
                for part in parts {
                    match part {
                        ContentPart::Typed { kind, text } if kind == "text" => {
                            pieces.push(text.as_str());
                        }
                        ContentPart::Plain(s) => pieces.push(s.as_str()),
                        _ => {}
                    }
                }
                pieces.join(" ")
            }
        }
    }
}

impl HookInput {
    /// Read and parse hook input from stdin.
    pub fn from_stdin() -> anyhow::Result<Self> {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        let parsed: HookInput = serde_json::from_str(&input)?;
        Ok(parsed)
    }

    /// Get the user prompt, preferring `prompt` over `query`.
    pub fn prompt(&self) -> &str {
        self.prompt
            .as_deref()
            .filter(|p| !p.is_empty())
            .or_else(|| self.query.as_deref())
            .unwrap_or("")
    }

    /// Get the transcript, preferring `transcript` over `messages`.
    pub fn transcript(&self) -> &[TranscriptMessage] {
        if !self.transcript.is_empty() {
            &self.transcript
        } else {
            &self.messages
        }
    }
}
