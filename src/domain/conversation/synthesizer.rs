//! Response synthesis.
//!
//! Maps `(mode, text)` to reply text using keyword inspection and the static
//! templates. Drafting is pure and total: any string, including the empty
//! string, yields a draft. The only nondeterminism is the chat fallback,
//! which is expressed as a [`Reply::OneOf`] and resolved by an index picker
//! supplied by the caller.

use super::templates;
use super::Mode;

/// A drafted reply, before any variant has been chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The reply is fully determined by the input.
    Fixed(String),
    /// One of several canned variants; the caller picks which.
    OneOf(&'static [&'static str]),
}

impl Reply {
    /// Turns the draft into text.
    ///
    /// `pick` receives the number of variants and returns an index; indices
    /// past the end wrap around. `pick` is not called for fixed replies.
    pub fn resolve(self, pick: impl FnOnce(usize) -> usize) -> String {
        match self {
            Reply::Fixed(text) => text,
            Reply::OneOf(variants) if variants.is_empty() => String::new(),
            Reply::OneOf(variants) => variants[pick(variants.len()) % variants.len()].to_string(),
        }
    }

    /// Returns true if resolving this draft involves a random choice.
    pub fn is_variant(&self) -> bool {
        matches!(self, Reply::OneOf(_))
    }
}

/// Drafts the reply for a message.
pub fn draft_reply(mode: Mode, text: &str) -> Reply {
    match mode {
        Mode::Code => Reply::Fixed(code_reply(text).to_string()),
        Mode::Search => Reply::Fixed(templates::search_results(text)),
        Mode::Think => Reply::Fixed(templates::deep_analysis(text)),
        Mode::Chat => chat_reply(text),
    }
}

/// Drafts and resolves in one step.
pub fn generate(mode: Mode, text: &str, pick: impl FnOnce(usize) -> usize) -> String {
    draft_reply(mode, text).resolve(pick)
}

// React/component is checked before python/script; first match wins.
fn code_reply(text: &str) -> &'static str {
    let keywords = text.to_lowercase();

    if contains_any(&keywords, &["react", "component"]) {
        templates::CODE_REACT_COMPONENT
    } else if contains_any(&keywords, &["python", "script"]) {
        templates::CODE_PYTHON_SCRIPT
    } else {
        templates::CODE_CAPABILITIES
    }
}

// Substring matching, so "this" counts as a greeting via "hi".
fn chat_reply(text: &str) -> Reply {
    let keywords = text.to_lowercase();

    if contains_any(&keywords, &["hello", "hi"]) {
        Reply::Fixed(templates::CHAT_GREETING.to_string())
    } else if contains_any(&keywords, &["help", "assist"]) {
        Reply::Fixed(templates::CHAT_CAPABILITIES.to_string())
    } else {
        Reply::OneOf(&templates::CHAT_FALLBACKS)
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
