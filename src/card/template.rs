//! Item template compilation and the default item extractor.
//!
//! Each decoded item becomes one display row. How an item turns into text is
//! decided once per configuration change: a configured template source is
//! compiled through the card's [`TemplateEngine`], and the compiled function is
//! then applied on every render. Compiling up front means template mistakes
//! surface at configuration time instead of scattering across renders.
//!
//! When no template is configured, or the engine offers no templating
//! capability, the [default extractor](default_extract) takes over: it probes a
//! fixed preference list of item properties and falls back to stringifying the
//! whole item.
//!
//! # Template Syntax (built-in engine)
//!
//! The built-in [`PlaceholderEngine`] understands `{{ item }}` for the whole
//! item and `{{ item.path.to.field }}` for nested fields, resolved with the
//! same lenient descent used for entity attribute paths:
//!
//! ```
//! use listcard::{PlaceholderEngine, TemplateEngine};
//! use serde_json::json;
//!
//! let render = PlaceholderEngine
//!     .compile("{{ item.title }} ({{ item.year }})")
//!     .unwrap()
//!     .unwrap();
//! let row = render(&json!({ "title": "Dune", "year": 1965 }));
//! assert_eq!(row, "Dune (1965)");
//! ```

use crate::card::resolve::descend;
use crate::domain::error::{CardError, Result};
use regex::Regex;
use serde_json::Value;
use std::fmt;

/// Item properties probed by the default extractor, in preference order.
const PREFERRED_KEYS: [&str; 4] = ["content", "value", "title", "name"];

/// A compiled item template: maps one item to its display text.
pub type RenderFn = Box<dyn Fn(&Value) -> String + Send + Sync>;

/// Injected templating capability.
///
/// The engine is chosen when the card is constructed and consulted once per
/// configuration change. Returning `Ok(None)` signals that no templating
/// capability is available, in which case the card silently falls back to the
/// default extractor, mirroring hosts that simply lack a template library.
///
/// # Implementations
///
/// - [`PlaceholderEngine`]: `{{ item.path }}` substitution (default)
/// - [`NullEngine`]: no capability, always falls back
pub trait TemplateEngine: Send + Sync {
    /// Compiles a template source into a render function.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::Template`] when the source is malformed. The card
    /// treats this as a configuration failure and commits nothing.
    fn compile(&self, source: &str) -> Result<Option<RenderFn>>;
}

/// Built-in placeholder substitution engine.
///
/// Supports `{{ item }}` and `{{ item.a.b }}` placeholders; everything outside
/// placeholders is emitted verbatim. Nested paths degrade leniently, stopping
/// at the last resolvable value rather than failing a render.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderEngine;

/// One compiled segment of a placeholder template.
enum Segment {
    Literal(String),
    /// Dotted path below `item`; empty means the whole item.
    Path(Vec<String>),
}

impl TemplateEngine for PlaceholderEngine {
    fn compile(&self, source: &str) -> Result<Option<RenderFn>> {
        let placeholder = Regex::new(r"\{\{([^{}]*)\}\}")
            .map_err(|e| CardError::Template(e.to_string()))?;
        let variable = Regex::new(r"^item(\.[A-Za-z0-9_\-]+)*$")
            .map_err(|e| CardError::Template(e.to_string()))?;

        let mut segments = Vec::new();
        let mut cursor = 0;

        for found in placeholder.captures_iter(source) {
            let whole = found.get(0).ok_or_else(|| {
                CardError::Template("placeholder match without capture".to_string())
            })?;
            let inner = found[1].trim().to_string();

            if !variable.is_match(&inner) {
                return Err(CardError::Template(format!(
                    "unknown template variable '{inner}', expected 'item' or 'item.<path>'"
                )));
            }

            if whole.start() > cursor {
                segments.push(Segment::Literal(source[cursor..whole.start()].to_string()));
            }

            let path: Vec<String> = inner
                .split('.')
                .skip(1)
                .map(ToString::to_string)
                .collect();
            segments.push(Segment::Path(path));
            cursor = whole.end();
        }

        if cursor < source.len() {
            segments.push(Segment::Literal(source[cursor..].to_string()));
        }

        Ok(Some(Box::new(move |item| {
            let mut out = String::new();
            for segment in &segments {
                match segment {
                    Segment::Literal(text) => out.push_str(text),
                    Segment::Path(path) => out.push_str(&display_string(descend(item, path))),
                }
            }
            out
        })))
    }
}

/// Engine that offers no templating capability.
///
/// Any configured template is ignored and the default extractor is used
/// instead. Useful for hosts that want deterministic extraction regardless of
/// user configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEngine;

impl TemplateEngine for NullEngine {
    fn compile(&self, _source: &str) -> Result<Option<RenderFn>> {
        Ok(None)
    }
}

/// The card's per-item rendering strategy, fixed at configuration time.
pub enum ItemRenderer {
    /// Apply a compiled template.
    Template(RenderFn),
    /// Apply the default extractor.
    Extract,
}

impl ItemRenderer {
    /// Renders one item to its display text.
    #[must_use]
    pub fn apply(&self, item: &Value) -> String {
        match self {
            Self::Template(render) => render(item),
            Self::Extract => default_extract(item),
        }
    }
}

impl Default for ItemRenderer {
    fn default() -> Self {
        Self::Extract
    }
}

impl fmt::Debug for ItemRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template(_) => f.write_str("ItemRenderer::Template(..)"),
            Self::Extract => f.write_str("ItemRenderer::Extract"),
        }
    }
}

/// Extracts display text from an item without a template.
///
/// Object-like items are probed for `content`, `value`, `title`, and `name` in
/// that order; the first present-and-truthy property wins. Items with none of
/// those properties are stringified whole, as are non-object items.
///
/// # Examples
///
/// ```
/// use listcard::card::template::default_extract;
/// use serde_json::json;
///
/// assert_eq!(default_extract(&json!({ "content": "A", "title": "C" })), "A");
/// assert_eq!(default_extract(&json!({})), "{}");
/// assert_eq!(default_extract(&json!("plain")), "plain");
/// ```
#[must_use]
pub fn default_extract(item: &Value) -> String {
    if let Value::Object(map) = item {
        for key in PREFERRED_KEYS {
            if let Some(value) = map.get(key) {
                if is_truthy(value) {
                    return display_string(value);
                }
            }
        }
        return item.to_string();
    }

    display_string(item)
}

/// Stringifies a value for display.
///
/// Strings render without surrounding quotes; everything else renders as
/// compact JSON.
#[must_use]
pub fn display_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Truthiness used when probing item properties.
///
/// Null, `false`, zero, and the empty string are falsy; arrays and objects are
/// always truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
