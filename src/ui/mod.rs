//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer projects the *core* model onto the terminal.  No file I/O
//! happens here.

pub mod layout;
pub mod links;
pub mod popup;
pub mod profile;
pub mod reveal;
pub mod theme;
