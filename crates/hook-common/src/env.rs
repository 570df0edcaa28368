//! .env discovery for hook processes.
//!
//! Hooks run as short-lived subprocesses that may not inherit the user's
//! shell environment, so configuration can also live in a `.env` file at a
//! workspace root. Values from the file never override variables already
//! present in the process environment.

use camino::Utf8Path;
use std::collections::HashMap;
use std::fs;

/// Fallback variables loaded from `.env` files.
#[derive(Debug, Clone, Default)]
pub struct EnvFile {
    vars: HashMap<String, String>,
}

impl EnvFile {
    /// Load the first `.env` found under the given workspace roots, then
    /// merge `.env` from the current directory. Earlier files win on
    /// duplicate keys. Unreadable files are skipped.
    pub fn discover(workspace_roots: &[String]) -> Self {
        let mut env_file = Self::default();

        for root in workspace_roots {
            let path = Utf8Path::new(root).join(".env");
            if path.is_file() {
                env_file.merge_file(&path);
                break;
            }
        }

        let cwd_env = Utf8Path::new(".").join(".env");
        if cwd_env.is_file() {
            env_file.merge_file(&cwd_env);
        }

        env_file
    }

    /// Load a single `.env` file.
    pub fn from_path(path: &Utf8Path) -> Self {
        let mut env_file = Self::default();
        env_file.merge_file(path);
        env_file
    }

    fn merge_file(&mut self, path: &Utf8Path) {
        let Ok(content) = fs::read_to_string(path) else {
            return;
        };
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            self.vars
                .entry(key.trim().to_string())
                .or_insert_with(|| value.trim().to_string());
        }
    }

    /// Get a variable from the loaded files.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Resolve a variable: the process environment wins, the file is the
    /// fallback.
    pub fn lookup(&self, key: &str) -> Option<String> {
        std::env::var(key)
            .ok()
            .or_else(|| self.get(key).map(str::to_string))
    }
}
