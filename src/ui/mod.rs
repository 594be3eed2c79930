//! UI / rendering layer: everything that touches Ratatui widgets.
//!
//! This layer takes the *core* page model and turns it into cells on the
//! terminal.  No filesystem I/O happens here.

pub mod image_view;
pub mod layout;
pub mod page_view;
pub mod scroll_view;
pub mod theme;
