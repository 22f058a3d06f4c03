//! View model types representing renderable card state.
//!
//! This module defines the immutable view computed by the card on every state
//! push. The view contains no business logic, only display-ready data; it is
//! the whole surface the presentation layer (this crate's reference renderer
//! or an embedding host) consumes.

/// Complete renderable card view.
///
/// Produced by `ListCard::render` and recomputed from scratch on every state
/// push; a view is never patched in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Card title, empty when the header should be omitted.
    pub title: String,

    /// One display string per retained item, in decoded order.
    pub rows: Vec<String>,

    /// Formatted last-updated timestamp, when enabled and available.
    pub last_updated: Option<String>,

    /// Height hint carried from the configuration (`"auto"` or a row count).
    pub height: String,
}

impl CardView {
    /// Returns the number of item rows, excluding the timestamp row.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Parses the height hint into a row bound, `None` meaning unconstrained.
    #[must_use]
    pub fn height_bound(&self) -> Option<usize> {
        if self.height == "auto" {
            None
        } else {
            self.height.parse().ok()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(height: &str) -> CardView {
        CardView {
            title: String::new(),
            rows: vec!["a".to_string(), "b".to_string()],
            last_updated: None,
            height: height.to_string(),
        }
    }

    #[test]
    fn auto_height_is_unconstrained() {
        assert_eq!(view("auto").height_bound(), None);
    }

    #[test]
    fn numeric_height_parses() {
        assert_eq!(view("5").height_bound(), Some(5));
    }

    #[test]
    fn unparseable_height_is_unconstrained() {
        assert_eq!(view("tall").height_bound(), None);
    }
}
