//! beforeSubmitPrompt hook: Inject relevant mem0 memories into the prompt.
//!
//! Searches mem0 for memories related to the current prompt and emits them
//! as a context block for the host to merge. Optionally auto-saves the
//! prompt as a new memory for continuous learning.
//!
//! Every path prints `{"action":"continue"}` and exits 0: a memory failure
//! must never block prompt submission.

use anyhow::Result;
use hook_common::prelude::*;
use hook_mem0::{Mem0Client, Mem0Config, MemoryMessage, format_memories, select_relevant};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Bounded wait for the fire-and-forget prompt save.
const AUTO_SAVE_WAIT: Duration = Duration::from_secs(2);

fn main() -> Result<()> {
    let input = match HookInput::from_stdin() {
        Ok(input) => input,
        Err(_) => return HookOutput::continue_().write_stdout(),
    };

    let env_file = EnvFile::discover(&input.workspace_roots);

    let prompt = input.prompt().to_string();
    if prompt.is_empty() {
        return HookOutput::continue_().write_stdout();
    }

    let config = Mem0Config::resolve(&env_file);
    let Some(api_key) = config.api_key.as_deref() else {
        return HookOutput::continue_().write_stdout();
    };

    let client = match Mem0Client::new(api_key, config.user_id.as_str()) {
        Ok(client) => client.with_base_url(config.base_url.as_str()),
        Err(e) => {
            eprintln!("Warning: mem0 client setup failed: {e}");
            return HookOutput::continue_().write_stdout();
        }
    };

    let hits = match client.search(&prompt, config.top_k, config.threshold) {
        Ok(hits) => hits,
        Err(e) => {
            eprintln!("Warning: mem0 search failed: {e}");
            Vec::new()
        }
    };

    if config.auto_save {
        save_prompt_background(client, prompt);
    }

    let block = format_memories(&select_relevant(hits, config.top_k, config.threshold));
    if block.is_empty() {
        HookOutput::continue_().write_stdout()
    } else {
        HookOutput::continue_().with_context(block).write_stdout()
    }
}

/// Save the prompt as a new memory on a background thread.
///
/// Waits at most [`AUTO_SAVE_WAIT`] for the call to finish so a slow add
/// delays the prompt only briefly. An add still in flight after the wait
/// is abandoned when the process exits shortly afterwards; the save is
/// opportunistic and may be lost. The outcome never affects the context
/// block; failures are logged to stderr and discarded.
fn save_prompt_background(client: Mem0Client, prompt: String) {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(client.add(&[MemoryMessage::user(prompt)]));
    });

    if let Ok(Err(e)) = rx.recv_timeout(AUTO_SAVE_WAIT) {
        eprintln!("Warning: mem0 auto-save failed: {e}");
    }
}
