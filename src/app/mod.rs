//! Application state, the event loop plumbing and input handling.

pub mod event;
pub mod handler;
pub mod link_runtime;
pub mod settings;
pub mod state;
