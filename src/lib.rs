//! Listcard: an embeddable dashboard card that renders a bounded list of
//! items from a single externally-owned entity state.
//!
//! The card resolves a nested value out of an opaque entity record via a
//! configurable attribute path, decodes it from one of several textual
//! encodings into an ordered item sequence, maps each item through a
//! configurable template, and recomputes the whole view on every state push.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host Shim (main.rs, or an embedding dashboard)     │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Card Layer (card/)                                 │  ← State machine
//! │  - Configuration merge + validation                 │
//! │  - Value resolution and decoding                    │
//! │  - Item template compilation                        │
//! └─────────────────────────────────────────────────────┘
//!         │                               │
//! ┌───────────────────┐          ┌───────────────────┐
//! │ UI Layer (ui/)    │          │ Domain (domain/)  │
//! │ - View model      │          │ - Entity model    │
//! │ - Theming         │          │ - Error types     │
//! │ - ANSI components │          │                   │
//! └───────────────────┘          └───────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber setup                         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`card`]: Configuration, resolution, templating, and the [`ListCard`]
//!   state machine
//! - [`domain`]: Entity references, state snapshots, and error types
//! - [`ui`]: View model, themes, and the reference ANSI renderer
//! - [`observability`]: Optional `tracing` subscriber setup
//!
//! # Control Flow
//!
//! The host drives the card with exactly two calls:
//!
//! 1. **Configure** ([`ListCard::set_config`]): on creation and on every
//!    configuration edit. Validates, compiles the item template, derives the
//!    entity reference, and refreshes the presentation style. Fails without
//!    touching the previous configuration.
//! 2. **Update state** ([`ListCard::update_state`]): on every state change,
//!    potentially very frequently. Each call recomputes the full
//!    [`CardView`]; the latest call wins.
//!
//! # Example
//!
//! ```
//! use listcard::{EntityState, ListCard, RawCardConfig, StateSnapshot, Theme};
//! use serde_json::json;
//!
//! let mut card = ListCard::new(Theme::default());
//! card.set_config(&RawCardConfig {
//!     entity: Some("sensor.shopping_list".to_string()),
//!     title: Some("Groceries".to_string()),
//!     max_num_items: Some(10),
//!     ..Default::default()
//! })?;
//!
//! let mut snapshot = StateSnapshot::new();
//! snapshot.insert(
//!     "sensor.shopping_list",
//!     EntityState::new(json!({
//!         "state": "[\"milk\", \"eggs\", \"bread\"]",
//!         "last_updated": "2024-06-01T12:30:00",
//!     })),
//! );
//!
//! let view = card.update_state(snapshot)?;
//! assert_eq!(view.rows, vec!["milk", "eggs", "bread"]);
//! assert_eq!(view.last_updated.as_deref(), Some("2024-06-01 12:30"));
//! # Ok::<(), listcard::CardError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Lenient Resolution, Strict Decoding
//!
//! Attribute-path segments that cannot be followed stop the walk and keep the
//! last resolved value, so a partially-matching path still displays something.
//! Malformed JSON payloads, in contrast, surface as errors through `render`'s
//! `Result`; the card offers no fallback content for undisplayable state.
//!
//! ## Compile Templates Once
//!
//! Item templates are compiled at configuration time and applied on every
//! render, so template mistakes surface at configuration time instead of
//! scattering across renders.
//!
//! ## Immutable Configuration Values
//!
//! Every configuration edit derives a fresh configuration from the previous
//! one plus the overrides. Nothing commits until validation and template
//! compilation succeed.

pub mod card;
pub mod domain;
pub mod observability;
pub mod ui;

pub use card::{
    CardConfig, ItemRenderer, ListCard, NullEngine, PlaceholderEngine, RawCardConfig,
    TemplateEngine,
};
pub use domain::{CardError, EntityRef, EntityState, Result, StateSnapshot};
pub use ui::{CardView, Theme};
