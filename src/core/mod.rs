//! Core model – report content, the document card stack, gestures and search.
//!
//! Nothing in this module depends on any TUI or rendering crate.
//! Every type is `Send + Sync` so it can be shared across async tasks.

pub mod card_stack;
pub mod cards;
pub mod chart;
pub mod content;
pub mod gesture;
pub mod report;
pub mod search;
pub mod stack;

/// A command-line / config value that doesn't name any known choice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} `{value}` (expected one of: {expected})")]
pub struct ParseChoiceError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}
