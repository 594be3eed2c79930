//! Core domain logic: pages, assets, animation and the page stack.
//!
//! Nothing in this module touches the terminal.

pub mod animation;
pub mod assets;
pub mod content;
pub mod deck;
pub mod page;
