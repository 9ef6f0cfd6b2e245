//! Rendering layer: everything that touches Ratatui widgets.
//!
//! This layer takes the *core* report model and card stack and turns them
//! into cells on the terminal.  No I/O happens here.

pub mod card_stack;
pub mod chart;
pub mod document;
pub mod layout;
pub mod modal;
pub mod popup;
pub mod report_view;
pub mod search;
pub mod settle;
pub mod theme;
pub mod wrap;
