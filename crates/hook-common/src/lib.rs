//! Common utilities for Cursor hooks.
//!
//! This crate provides shared functionality for all Rust-based hooks:
//! - JSON input/output parsing
//! - .env file discovery
//! - Error handling

pub mod env;
pub mod input;
pub mod output;

pub use env::EnvFile;
pub use input::{HookInput, TranscriptMessage};
pub use output::HookOutput;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::env::EnvFile;
    pub use crate::input::{HookInput, TranscriptMessage};
    pub use crate::output::HookOutput;
    pub use anyhow::{Context, Result};
    pub use serde::{Deserialize, Serialize};
}
