//! mem0 hosted memory API for Cursor hooks.
//!
//! Provides:
//! - Environment-driven configuration
//! - A blocking HTTP client for the mem0 search/add endpoints
//! - Context-block selection and formatting

pub mod client;
pub mod config;
pub mod context;

pub use client::{Mem0Client, Mem0Error, MemoryHit, MemoryMessage};
pub use config::Mem0Config;
pub use context::{format_memories, select_relevant};
