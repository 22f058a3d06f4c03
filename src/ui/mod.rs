//! Reference presentation layer with component-based rendering.
//!
//! This module turns card views into ANSI-styled terminal output through
//! composable rendering components. It is the collaborator side of the card:
//! the card computes a [`CardView`]; this layer (or an embedding host's own
//! presentation) composites it into something visible.
//!
//! ```text
//! ListCard → render → CardView → ui::render → ANSI output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: The renderable [`CardView`] type
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Header, list, and timestamp component renderers
//! - [`helpers`]: Cursor positioning and width clipping
//! - [`theme`]: Color schemes, style fragments, and ANSI sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::{Theme, ThemeColors};
pub use viewmodel::CardView;
