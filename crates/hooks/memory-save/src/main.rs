//! stop hook: Persist the conversation tail to mem0 when a session ends.
//!
//! Takes the last N transcript messages (N = MEM0_SAVE_MESSAGES) and
//! submits them as one memory-add call. Best effort: a failed save is
//! logged to stderr and must never prevent session teardown.

use anyhow::Result;
use hook_common::prelude::*;
use hook_mem0::{Mem0Client, Mem0Config, MemoryMessage};

/// Messages longer than this are clipped before forwarding.
const MAX_CONTENT_LENGTH: usize = 2000;

fn main() -> Result<()> {
    let input = match HookInput::from_stdin() {
        Ok(input) => input,
        Err(_) => return HookOutput::continue_().write_stdout(),
    };

    let env_file = EnvFile::discover(&input.workspace_roots);
    let config = Mem0Config::resolve(&env_file);

    let Some(api_key) = config.api_key.as_deref() else {
        return HookOutput::continue_().write_stdout();
    };

    let messages = extract_messages(input.transcript(), config.save_messages);

    if !messages.is_empty() {
        match Mem0Client::new(api_key, config.user_id.as_str()) {
            Ok(client) => {
                let client = client.with_base_url(config.base_url.as_str());
                if let Err(e) = client.add(&messages) {
                    eprintln!("Warning: mem0 session save failed: {e}");
                }
            }
            Err(e) => eprintln!("Warning: mem0 client setup failed: {e}"),
        }
    }

    HookOutput::continue_().write_stdout()
}

/// Take the last `max` transcript entries, flatten part-list bodies to
/// text, and drop entries with an empty role or body.
fn extract_messages(transcript: &[TranscriptMessage], max: usize) -> Vec<MemoryMessage> {
    let start = transcript.len().saturating_sub(max);

    transcript[start..]
        .iter()
        .filter_map(|msg| {
            let content = msg.text();
            if msg.role.is_empty() || content.is_empty() {
                return None;
            }
            Some(MemoryMessage::new(&msg.role, clip(&content)))
        })
        .collect()
}

fn clip(content: &str) -> String {
    if content.chars().count() > MAX_CONTENT_LENGTH {
        let clipped: String = content.chars().take(MAX_CONTENT_LENGTH).collect();
        format!("{clipped}...")
    } else {
        content.to_string()
    }
}
