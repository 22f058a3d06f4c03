//! The card state machine: configuration, state updates, and view computation.
//!
//! [`ListCard`] is the single component of this crate. It owns the committed
//! configuration, the compiled item renderer, the active presentation style,
//! and a reference to the latest state snapshot. Control flow is push-based:
//! the host calls [`ListCard::set_config`] once and on edits, and
//! [`ListCard::update_state`] on every state change, which recomputes the full
//! view each time.
//!
//! # Atomicity
//!
//! Both entry points either fully complete or leave the card untouched.
//! `set_config` validates the merged candidate and compiles the item template
//! before committing any field; a failing edit leaves the previous
//! configuration live. `update_state` is a pure recomputation over the new
//! snapshot plus whatever configuration was last committed.
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
//!     ..Default::default()
//! })?;
//!
//! let mut snapshot = StateSnapshot::new();
//! snapshot.insert(
//!     "sensor.shopping_list",
//!     EntityState::new(json!({
//!         "state": "[\"milk\", \"eggs\"]",
//!         "last_updated": "2024-06-01T12:30:00",
//!     })),
//! );
//!
//! let view = card.update_state(snapshot)?;
//! assert_eq!(view.rows, vec!["milk", "eggs"]);
//! # Ok::<(), listcard::CardError>(())
//! ```

use crate::card::config::{CardConfig, RawCardConfig};
use crate::card::resolve::resolve_items;
use crate::card::template::{ItemRenderer, PlaceholderEngine, TemplateEngine};
use crate::domain::entity::{EntityRef, EntityState, StateSnapshot};
use crate::domain::error::{CardError, Result};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardView;
use chrono::{DateTime, Local, NaiveDateTime};

/// Timestamp layout of the trailing last-updated row.
const DISPLAY_TIMESTAMP: &str = "%Y-%m-%d %H:%M";

/// Naive timestamp layouts accepted from entity records, tried in order after
/// RFC 3339.
const NAIVE_TIMESTAMPS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// An embeddable card rendering a bounded list of items from one entity.
///
/// The card reports a fixed unit size hint ([`ListCard::CARD_SIZE`]) to hosts
/// that lay cards out on a grid.
pub struct ListCard {
    engine: Box<dyn TemplateEngine>,
    config: CardConfig,
    entity_ref: Option<EntityRef>,
    renderer: ItemRenderer,
    theme: Theme,
    style: Theme,
    snapshot: Option<StateSnapshot>,
}

impl ListCard {
    /// Fixed card-size hint reported to the host layout.
    pub const CARD_SIZE: u8 = 1;

    /// Creates a card with the built-in placeholder template engine.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self::with_engine(theme, Box::new(PlaceholderEngine))
    }

    /// Creates a card with an injected template engine.
    ///
    /// Hosts without a templating capability pass
    /// [`NullEngine`](crate::card::template::NullEngine); configured templates
    /// are then ignored in favor of the default extractor.
    #[must_use]
    pub fn with_engine(theme: Theme, engine: Box<dyn TemplateEngine>) -> Self {
        let style = theme.clone();
        Self {
            engine,
            config: CardConfig::default(),
            entity_ref: None,
            renderer: ItemRenderer::default(),
            theme,
            style,
            snapshot: None,
        }
    }

    /// Applies a configuration edit.
    ///
    /// The raw mapping is merged over the current configuration (cumulative
    /// merge), the entity reference is re-derived, and the item template is
    /// compiled. Only when all of that succeeds is the candidate committed and
    /// the presentation style refreshed. Style refresh happens here and only
    /// here; state updates never touch it.
    ///
    /// # Errors
    ///
    /// - [`CardError::Config`] when the merged configuration lacks an entity
    /// - [`CardError::Template`] when the item template fails to compile
    ///
    /// On error the previously committed configuration stays live.
    pub fn set_config(&mut self, raw: &RawCardConfig) -> Result<()> {
        let _span = tracing::debug_span!("set_config").entered();

        let candidate = self.config.merged(raw)?;
        let entity_ref = EntityRef::parse(&candidate.entity);
        let renderer = match &candidate.item_template {
            Some(source) => match self.engine.compile(source)? {
                Some(render) => ItemRenderer::Template(render),
                None => ItemRenderer::Extract,
            },
            None => ItemRenderer::Extract,
        };

        tracing::debug!(
            entity = %candidate.entity,
            format = %candidate.from_format,
            max_items = candidate.max_num_items,
            "configuration committed"
        );

        self.config = candidate;
        self.entity_ref = Some(entity_ref);
        self.renderer = renderer;
        self.refresh_style();
        Ok(())
    }

    /// Accepts a new state snapshot and recomputes the view.
    ///
    /// Every call replaces the previous snapshot wholesale and performs a full
    /// recomputation; the latest call's result is authoritative. No debouncing
    /// or coalescing happens here even under rapid pushes.
    ///
    /// # Errors
    ///
    /// Propagates any render failure (see [`ListCard::render`]). The snapshot
    /// is retained even when rendering fails, matching the
    /// store-then-recompute update order.
    pub fn update_state(&mut self, snapshot: StateSnapshot) -> Result<CardView> {
        let view = self.render(&snapshot);
        self.snapshot = Some(snapshot);
        view
    }

    /// Computes the renderable view from a snapshot.
    ///
    /// Pure with respect to the snapshot and the committed configuration:
    /// resolves the configured value, decodes it into items, truncates to the
    /// configured bound (first N, original order, silent), and maps each
    /// retained item through the compiled renderer. Nothing is cached between
    /// calls.
    ///
    /// # Errors
    ///
    /// - [`CardError::Config`] when no configuration was ever committed
    /// - [`CardError::UnknownEntity`] when the snapshot lacks the entity
    /// - [`CardError::Decode`] on a malformed JSON state value
    /// - [`CardError::NotASequence`] when decoding leaves a non-array value
    pub fn render(&self, snapshot: &StateSnapshot) -> Result<CardView> {
        let entity_ref = self
            .entity_ref
            .as_ref()
            .ok_or_else(|| CardError::Config("card is not configured".to_string()))?;

        let _span = tracing::debug_span!("render", entity = %entity_ref.base_id).entered();

        let items = resolve_items(snapshot, entity_ref, &self.config.from_format)?;
        let rows: Vec<String> = items
            .iter()
            .take(self.config.max_num_items)
            .map(|item| self.renderer.apply(item))
            .collect();

        let last_updated = if self.config.show_last_updated {
            snapshot
                .get(&entity_ref.base_id)
                .and_then(EntityState::last_updated)
                .map(format_timestamp)
        } else {
            None
        };

        tracing::debug!(
            decoded = items.len(),
            rendered = rows.len(),
            "view computed"
        );

        Ok(CardView {
            title: self.config.title.clone(),
            rows,
            last_updated,
            height: self.config.height.clone(),
        })
    }

    /// Returns the committed card title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.config.title
    }

    /// Returns the committed configuration.
    #[must_use]
    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    /// Returns the active presentation style (base theme plus any committed
    /// style fragment).
    #[must_use]
    pub fn style(&self) -> &Theme {
        &self.style
    }

    /// Returns the last snapshot pushed by the host, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<&StateSnapshot> {
        self.snapshot.as_ref()
    }

    /// Returns the fixed card-size hint.
    #[must_use]
    pub const fn card_size(&self) -> u8 {
        Self::CARD_SIZE
    }

    /// Recomputes the active style from the base theme and the committed
    /// style fragment. A malformed fragment degrades to the base theme.
    fn refresh_style(&mut self) {
        self.style = match self.config.extra_style.as_deref() {
            Some(fragment) => self.theme.with_overrides(fragment).unwrap_or_else(|e| {
                tracing::debug!(error = %e, "style fragment rejected, keeping base theme");
                self.theme.clone()
            }),
            None => self.theme.clone(),
        };
    }
}

/// Formats an entity timestamp as `YYYY-MM-DD HH:MM` on the local clock.
///
/// RFC 3339 timestamps are converted to local time; naive timestamps are read
/// as local wall-clock time directly. Anything unparseable renders unchanged,
/// a degradation rather than an error.
fn format_timestamp(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed
            .with_timezone(&Local)
            .format(DISPLAY_TIMESTAMP)
            .to_string();
    }

    for layout in NAIVE_TIMESTAMPS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, layout) {
            return parsed.format(DISPLAY_TIMESTAMP).to_string();
        }
    }

    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::template::NullEngine;
    use serde_json::json;

    fn configured_card(raw: RawCardConfig) -> ListCard {
        let mut card = ListCard::new(Theme::default());
        card.set_config(&raw).unwrap();
        card
    }

    fn snapshot_with(id: &str, record: serde_json::Value) -> StateSnapshot {
        let mut snapshot = StateSnapshot::new();
        snapshot.insert(id, EntityState::new(record));
        snapshot
    }

    #[test]
    fn set_config_requires_entity() {
        let mut card = ListCard::new(Theme::default());
        let err = card.set_config(&RawCardConfig::default()).unwrap_err();
        assert!(matches!(err, CardError::Config(_)));
    }

    #[test]
    fn failed_edit_leaves_previous_config_committed() {
        let mut card = configured_card(RawCardConfig {
            entity: Some("sensor.a".to_string()),
            title: Some("Kept".to_string()),
            ..Default::default()
        });

        let err = card
            .set_config(&RawCardConfig {
                item_template: Some("{{ nonsense }}".to_string()),
                ..Default::default()
            })
            .unwrap_err();

        assert!(matches!(err, CardError::Template(_)));
        assert_eq!(card.title(), "Kept");
        assert_eq!(card.config().item_template, None);
    }

    #[test]
    fn render_before_configuration_fails() {
        let card = ListCard::new(Theme::default());
        let err = card.render(&StateSnapshot::new()).unwrap_err();
        assert!(matches!(err, CardError::Config(_)));
    }

    #[test]
    fn render_decodes_json_state() {
        let card = configured_card(RawCardConfig {
            entity: Some("sensor.list".to_string()),
            ..Default::default()
        });
        let snapshot = snapshot_with(
            "sensor.list",
            json!({ "state": "[\"a\", \"b\", \"c\"]", "last_updated": "2021-03-05T09:07:00" }),
        );

        let view = card.render(&snapshot).unwrap();
        assert_eq!(view.rows, vec!["a", "b", "c"]);
        assert_eq!(view.last_updated.as_deref(), Some("2021-03-05 09:07"));
    }

    #[test]
    fn render_truncates_to_max_items_in_order() {
        let card = configured_card(RawCardConfig {
            entity: Some("sensor.list".to_string()),
            max_num_items: Some(2),
            ..Default::default()
        });
        let snapshot = snapshot_with(
            "sensor.list",
            json!({ "state": "[1, 2, 3, 4, 5]", "last_updated": "2024-01-01T00:00:00" }),
        );

        let view = card.render(&snapshot).unwrap();
        assert_eq!(view.rows, vec!["1", "2"]);
    }

    #[test]
    fn render_row_count_is_min_of_length_and_bound() {
        let card = configured_card(RawCardConfig {
            entity: Some("sensor.list".to_string()),
            max_num_items: Some(10),
            ..Default::default()
        });
        let snapshot = snapshot_with(
            "sensor.list",
            json!({ "state": "[1, 2, 3]", "last_updated": "2024-01-01T00:00:00" }),
        );

        let view = card.render(&snapshot).unwrap();
        assert_eq!(view.rows.len(), 3);
    }

    #[test]
    fn render_splits_on_delimiter_format() {
        let card = configured_card(RawCardConfig {
            entity: Some("sensor.csv".to_string()),
            from_format: Some(",".to_string()),
            ..Default::default()
        });
        let snapshot = snapshot_with(
            "sensor.csv",
            json!({ "state": "x,y,z", "last_updated": "2024-01-01T00:00:00" }),
        );

        let view = card.render(&snapshot).unwrap();
        assert_eq!(view.rows, vec!["x", "y", "z"]);
    }

    #[test]
    fn render_surfaces_malformed_json() {
        let card = configured_card(RawCardConfig {
            entity: Some("sensor.bad".to_string()),
            ..Default::default()
        });
        let snapshot = snapshot_with(
            "sensor.bad",
            json!({ "state": "not json", "last_updated": "2024-01-01T00:00:00" }),
        );

        assert!(matches!(
            card.render(&snapshot),
            Err(CardError::Decode(_))
        ));
    }

    #[test]
    fn render_surfaces_unsequenced_passthrough() {
        // An empty format leaves a bare string flowing into sequencing, which
        // cannot iterate it. The failure is surfaced, not silently patched.
        let card = configured_card(RawCardConfig {
            entity: Some("sensor.raw".to_string()),
            from_format: Some(String::new()),
            ..Default::default()
        });
        let snapshot = snapshot_with(
            "sensor.raw",
            json!({ "state": "loose", "last_updated": "2024-01-01T00:00:00" }),
        );

        assert!(matches!(
            card.render(&snapshot),
            Err(CardError::NotASequence)
        ));
    }

    #[test]
    fn render_walks_residual_attribute_path() {
        let card = configured_card(RawCardConfig {
            entity: Some("sensor.feed.attributes.entries".to_string()),
            ..Default::default()
        });
        let snapshot = snapshot_with(
            "sensor.feed",
            json!({
                "state": "ok",
                "last_updated": "2024-01-01T00:00:00",
                "attributes": { "entries": [{ "title": "first" }, { "title": "second" }] }
            }),
        );

        let view = card.render(&snapshot).unwrap();
        assert_eq!(view.rows, vec!["first", "second"]);
    }

    #[test]
    fn render_applies_item_template() {
        let card = configured_card(RawCardConfig {
            entity: Some("sensor.list".to_string()),
            item_template: Some("* {{ item.title }}".to_string()),
            ..Default::default()
        });
        let snapshot = snapshot_with(
            "sensor.list",
            json!({ "state": "[{\"title\": \"a\"}]", "last_updated": "2024-01-01T00:00:00" }),
        );

        let view = card.render(&snapshot).unwrap();
        assert_eq!(view.rows, vec!["* a"]);
    }

    #[test]
    fn null_engine_falls_back_to_extractor() {
        let mut card = ListCard::with_engine(Theme::default(), Box::new(NullEngine));
        card.set_config(&RawCardConfig {
            entity: Some("sensor.list".to_string()),
            item_template: Some("* {{ item.title }}".to_string()),
            ..Default::default()
        })
        .unwrap();
        let snapshot = snapshot_with(
            "sensor.list",
            json!({ "state": "[{\"title\": \"a\"}]", "last_updated": "2024-01-01T00:00:00" }),
        );

        let view = card.render(&snapshot).unwrap();
        assert_eq!(view.rows, vec!["a"]);
    }

    #[test]
    fn last_updated_row_can_be_disabled() {
        let card = configured_card(RawCardConfig {
            entity: Some("sensor.list".to_string()),
            show_last_updated: Some(false),
            ..Default::default()
        });
        let snapshot = snapshot_with(
            "sensor.list",
            json!({ "state": "[]", "last_updated": "2024-01-01T00:00:00" }),
        );

        let view = card.render(&snapshot).unwrap();
        assert_eq!(view.last_updated, None);
    }

    #[test]
    fn update_state_retains_snapshot_even_on_failure() {
        let mut card = configured_card(RawCardConfig {
            entity: Some("sensor.gone".to_string()),
            ..Default::default()
        });

        let err = card.update_state(StateSnapshot::new()).unwrap_err();
        assert!(matches!(err, CardError::UnknownEntity(_)));
        assert!(card.snapshot().is_some());
    }

    #[test]
    fn style_fragment_overrides_theme_at_configure_time() {
        let card = configured_card(RawCardConfig {
            entity: Some("sensor.list".to_string()),
            extra_style: Some("divider = \"#ff0000\"".to_string()),
            ..Default::default()
        });

        assert_eq!(card.style().colors.divider, "#ff0000");
        assert_eq!(
            card.style().colors.header_fg,
            Theme::default().colors.header_fg
        );
    }

    #[test]
    fn malformed_style_fragment_keeps_base_theme() {
        let card = configured_card(RawCardConfig {
            entity: Some("sensor.list".to_string()),
            extra_style: Some("not = [valid".to_string()),
            ..Default::default()
        });

        assert_eq!(card.style().colors.divider, Theme::default().colors.divider);
    }

    #[test]
    fn timestamp_formats_naive_local_time() {
        assert_eq!(format_timestamp("2021-03-05T09:07:00"), "2021-03-05 09:07");
        assert_eq!(
            format_timestamp("2021-03-05T09:07:00.123456"),
            "2021-03-05 09:07"
        );
        assert_eq!(format_timestamp("2021-03-05 09:07:00"), "2021-03-05 09:07");
    }

    #[test]
    fn unparseable_timestamp_renders_unchanged() {
        assert_eq!(format_timestamp("soon"), "soon");
    }

    #[test]
    fn card_size_is_fixed() {
        let card = ListCard::new(Theme::default());
        assert_eq!(card.card_size(), 1);
    }
}
