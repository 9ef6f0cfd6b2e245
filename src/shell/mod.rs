//! Desktop integration helpers.
//!
//! All TUI rendering goes to the alternate screen (stderr-backed), so stdout
//! is reserved for the "result": the links the reader opened during the
//! session, printed once the terminal is restored.

pub mod integration;
