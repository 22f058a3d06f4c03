//! Card layer: configuration, resolution, templating, and the state machine.
//!
//! This module implements the whole configure/update/render pipeline, sitting
//! between the host-facing crate surface and the domain/ui layers.
//!
//! # Data Flow
//!
//! ```text
//! RawCardConfig → merge + validate → CardConfig
//!                                       │ (compile template, derive entity ref)
//! StateSnapshot → resolve → decode → truncate → render items → CardView
//! ```
//!
//! # Modules
//!
//! - [`config`]: Raw configuration parsing, defaults, cumulative merge
//! - [`resolve`]: Attribute-path descent and format-driven decoding
//! - [`template`]: Template engine seam and default item extractor
//! - [`card`]: The [`ListCard`] component itself

pub mod card;
pub mod config;
pub mod resolve;
pub mod template;

pub use card::ListCard;
pub use config::{CardConfig, RawCardConfig};
pub use template::{ItemRenderer, NullEngine, PlaceholderEngine, TemplateEngine};
