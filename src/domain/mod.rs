//! Domain layer for the list card.
//!
//! This module contains the core domain types for the card, independent of any
//! presentation or host-integration concerns. It follows domain-driven design
//! principles by keeping the entity model and error taxonomy isolated from
//! external dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`entity`]: Entity references, entity state records, and snapshots
//!
//! # Examples
//!
//! ```
//! use listcard::{EntityRef, Result};
//!
//! fn derive_reference() -> Result<EntityRef> {
//!     Ok(EntityRef::parse("sensor.shopping_list.attributes.items"))
//! }
//! ```

pub mod entity;
pub mod error;

pub use entity::{EntityRef, EntityState, StateSnapshot};
pub use error::{CardError, Result};
