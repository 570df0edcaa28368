//! Hook configuration from environment variables.

use crate::client::DEFAULT_BASE_URL;
use hook_common::EnvFile;

/// Immutable configuration snapshot, resolved once per hook invocation.
///
/// Environment variables (process environment first, `.env` fallback):
/// - `MEM0_API_KEY`: required; hooks no-op without it
/// - `MEM0_USER_ID`: memory scoping identifier (default: `cursor-user`)
/// - `MEM0_TOP_K`: memories to retrieve per search (default: 5)
/// - `MEM0_THRESHOLD`: minimum similarity score (default: 0.3)
/// - `MEM0_AUTO_SAVE`: save each prompt as a memory (default: true)
/// - `MEM0_SAVE_MESSAGES`: transcript tail length saved on stop (default: 10)
/// - `MEM0_BASE_URL`: API endpoint override, for proxies and tests
#[derive(Debug, Clone)]
pub struct Mem0Config {
    /// None when unset or empty.
    pub api_key: Option<String>,
    pub user_id: String,
    pub top_k: usize,
    pub threshold: f64,
    pub auto_save: bool,
    pub save_messages: usize,
    pub base_url: String,
}

pub const DEFAULT_USER_ID: &str = "cursor-user";
pub const DEFAULT_TOP_K: usize = 5;
pub const DEFAULT_THRESHOLD: f64 = 0.3;
pub const DEFAULT_SAVE_MESSAGES: usize = 10;

impl Mem0Config {
    /// Resolve configuration from the process environment with `.env`
    /// fallback values.
    pub fn resolve(env_file: &EnvFile) -> Self {
        Self::resolve_with(|key| env_file.lookup(key))
    }

    /// Resolve configuration through an arbitrary variable lookup.
    ///
    /// Unparseable numeric or boolean values fall back to their defaults
    /// rather than failing the hook.
    pub fn resolve_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_key: lookup("MEM0_API_KEY").filter(|k| !k.is_empty()),
            user_id: lookup("MEM0_USER_ID")
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| DEFAULT_USER_ID.to_string()),
            top_k: parse_or(lookup("MEM0_TOP_K"), DEFAULT_TOP_K),
            threshold: parse_or(lookup("MEM0_THRESHOLD"), DEFAULT_THRESHOLD),
            auto_save: lookup("MEM0_AUTO_SAVE")
                .map(|v| v.trim().eq_ignore_ascii_case("true"))
                .unwrap_or(true),
            save_messages: parse_or(lookup("MEM0_SAVE_MESSAGES"), DEFAULT_SAVE_MESSAGES),
            base_url: lookup("MEM0_BASE_URL")
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
