//! Per-record state accumulated while an element is tracked

use std::collections::HashMap;
use std::str::FromStr;

/// Attribute names to values for one element
pub type Attributes = HashMap<String, String>;

/// Flat record of everything seen under a tracked element
///
/// Element names map to their accumulated character data; attribute names
/// map to their values. Both share one namespace, so a later element or
/// attribute with the same name replaces an earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementState {
    values: HashMap<String, String>,
}

impl ElementState {
    /// Value recorded under `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Parse the value under `key`, treating absent or unparseable values as None
    pub fn parse<T: FromStr>(&self, key: &str) -> Option<T> {
        self.get(key).and_then(|v| v.trim().parse().ok())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Record an element opening: empty text plus its attributes
    pub(crate) fn begin_element(&mut self, name: &str, attributes: Attributes) {
        self.values.insert(name.to_string(), String::new());
        self.values.extend(attributes);
    }

    /// Append a chunk of character data to `element`
    ///
    /// Whitespace-only chunks never start a value, and are only kept while
    /// the element is still open and already has text.
    pub(crate) fn append_text(&mut self, element: &str, text: &str, open: bool) {
        let value = self.values.entry(element.to_string()).or_default();
        if text.trim().is_empty() && (!open || value.is_empty()) {
            return;
        }
        value.push_str(text);
    }

    pub(crate) fn clear(&mut self) {
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_element_merges_attributes() {
        let mut state = ElementState::default();
        let mut attributes = Attributes::new();
        attributes.insert("lat".to_string(), "1.5".to_string());

        state.begin_element("trkpt", attributes);

        assert_eq!(state.get("trkpt"), Some(""));
        assert_eq!(state.parse::<f64>("lat"), Some(1.5));
        assert_eq!(state.parse::<f64>("lon"), None);
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn test_append_text() {
        let mut state = ElementState::default();
        state.begin_element("name", Attributes::new());

        state.append_text("name", "  ", true);
        assert_eq!(state.get("name"), Some(""));

        state.append_text("name", "Fish", true);
        state.append_text("name", " ", true);
        state.append_text("name", "& Chips", true);
        assert_eq!(state.get("name"), Some("Fish & Chips"));

        state.append_text("name", "\n", false);
        assert_eq!(state.get("name"), Some("Fish & Chips"));
    }

    #[test]
    fn test_clear() {
        let mut state = ElementState::default();
        state.begin_element("ele", Attributes::new());
        state.clear();
        assert!(state.is_empty());
        assert!(!state.contains_key("ele"));
    }
}
