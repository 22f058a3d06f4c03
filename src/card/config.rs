//! Card configuration parsing, defaults, and merging.
//!
//! Configuration arrives from the host as a loosely-shaped mapping
//! ([`RawCardConfig`]) and is merged over the previously committed
//! configuration to produce a [`CardConfig`]. Merging is cumulative: fields
//! absent from a raw mapping keep their current values, so repeated
//! configuration edits only ever override what they name.
//!
//! # Wire Keys
//!
//! Canonical keys are snake_case; camelCase spellings and the legacy `sensor`
//! key are accepted as aliases:
//!
//! | Key | Alias | Default |
//! |---|---|---|
//! | `entity` | `sensor` | required |
//! | `from_format` | `fromFormat` | `"json"` |
//! | `max_num_items` | `maxNumItems` | `100` |
//! | `title` | | `""` |
//! | `item_template` | `itemTemplate` | unset |
//! | `show_last_updated` | `showLastUpdated` | `true` |
//! | `extra_style` | `extra_css`, `extraCss` | unset |
//! | `height` | | `"auto"` |

use crate::domain::error::{CardError, Result};
use serde::Deserialize;

/// Decode format selecting structured JSON parsing.
pub const FORMAT_JSON: &str = "json";

/// Host-facing configuration mapping.
///
/// Every field is optional at the wire level so that the same type serves both
/// the initial configuration and later partial edits. Presence of the required
/// `entity` field is validated at merge time, not at deserialization time,
/// because an edit may legitimately omit it when a prior configuration already
/// supplied one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCardConfig {
    /// Entity reference, optionally with a nested attribute path.
    #[serde(alias = "sensor")]
    pub entity: Option<String>,

    /// Decode format: `"json"`, a split delimiter, or empty for pass-through.
    #[serde(alias = "fromFormat")]
    pub from_format: Option<String>,

    /// Upper bound on rendered items.
    #[serde(alias = "maxNumItems")]
    pub max_num_items: Option<usize>,

    /// Card title shown in the header.
    pub title: Option<String>,

    /// Item template source, rendered once per item.
    #[serde(alias = "itemTemplate")]
    pub item_template: Option<String>,

    /// Whether to append a trailing last-updated row.
    #[serde(alias = "showLastUpdated")]
    pub show_last_updated: Option<bool>,

    /// Raw style fragment handed to the presentation layer verbatim.
    #[serde(alias = "extra_css", alias = "extraCss")]
    pub extra_style: Option<String>,

    /// Height hint for the presentation layer (`"auto"` or a row count).
    pub height: Option<String>,
}

/// Committed card configuration.
///
/// Produced by [`CardConfig::merged`] and treated as an immutable value from
/// then on; every configuration edit derives a fresh `CardConfig` from the
/// previous one plus the overrides, never mutating in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardConfig {
    /// Raw entity reference as configured.
    pub entity: String,

    /// Decode format applied to textual state values.
    pub from_format: String,

    /// Upper bound on rendered items; the sequence is truncated silently.
    pub max_num_items: usize,

    /// Card title, empty when the header should be omitted.
    pub title: String,

    /// Item template source, if any.
    pub item_template: Option<String>,

    /// Whether the rendered view carries a last-updated row.
    pub show_last_updated: bool,

    /// Raw style fragment for the presentation layer.
    pub extra_style: Option<String>,

    /// Presentation height hint.
    pub height: String,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            entity: String::new(),
            from_format: FORMAT_JSON.to_string(),
            max_num_items: 100,
            title: String::new(),
            item_template: None,
            show_last_updated: true,
            extra_style: None,
            height: "auto".to_string(),
        }
    }
}

impl CardConfig {
    /// Merges a raw configuration over this one, validating the result.
    ///
    /// Fields present in `raw` win; absent fields keep their current values.
    /// The merged candidate must carry a non-empty entity reference.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::Config`] when neither `raw` nor the current
    /// configuration supplies an entity. The current configuration is left
    /// untouched in that case; the caller only commits on `Ok`.
    pub fn merged(&self, raw: &RawCardConfig) -> Result<Self> {
        let entity = raw.entity.clone().unwrap_or_else(|| self.entity.clone());
        if entity.is_empty() {
            return Err(CardError::Config(
                "missing required field 'entity'".to_string(),
            ));
        }

        Ok(Self {
            entity,
            from_format: raw
                .from_format
                .clone()
                .unwrap_or_else(|| self.from_format.clone()),
            max_num_items: raw.max_num_items.unwrap_or(self.max_num_items),
            title: raw.title.clone().unwrap_or_else(|| self.title.clone()),
            item_template: raw.item_template.clone().or_else(|| self.item_template.clone()),
            show_last_updated: raw.show_last_updated.unwrap_or(self.show_last_updated),
            extra_style: raw.extra_style.clone().or_else(|| self.extra_style.clone()),
            height: raw.height.clone().unwrap_or_else(|| self.height.clone()),
        })
    }
}
