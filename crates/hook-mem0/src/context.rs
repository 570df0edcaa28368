//! Selection and formatting of retrieved memories for context injection.

use crate::client::MemoryHit;

/// Header for the injected context block.
const CONTEXT_HEADER: &str = "## Relevant memories from previous conversations:";

/// Drop hits below the similarity threshold and cap the list at `top_k`.
///
/// The remote service already applies both parameters, but responses are
/// not trusted to honor them; this keeps the contract local. Hits without
/// a score are kept. Remote order is preserved.
pub fn select_relevant(hits: Vec<MemoryHit>, top_k: usize, threshold: f64) -> Vec<MemoryHit> {
    hits.into_iter()
        .filter(|hit| hit.score.is_none_or(|score| score >= threshold))
        .take(top_k)
        .collect()
}

/// Format memories as a bulleted context block.
///
/// Returns an empty string when there is nothing to inject, so callers can
/// skip the context field entirely.
pub fn format_memories(hits: &[MemoryHit]) -> String {
    let mut lines = Vec::new();

    for hit in hits {
        if hit.memory.is_empty() {
            continue;
        }
        if hit.categories.is_empty() {
            lines.push(format!("- {}", hit.memory));
        } else {
            lines.push(format!("- [{}] {}", hit.categories.join(", "), hit.memory));
        }
    }

    if lines.is_empty() {
        return String::new();
    }

    format!("{}\n{}", CONTEXT_HEADER, lines.join("\n"))
}
