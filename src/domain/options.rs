use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const HEIGHT: &str = "height";
pub const VIEW_CLASS_NAMES: &str = "viewClassNames";
pub const PLUGINS: &str = "plugins";
pub const DAY_CELL_CLASS_NAMES: &str = "dayCellClassNames";

/// Keys the view factory always sets itself. Caller values for these are
/// never applied.
pub const MANAGED_KEYS: &[&str] = &[VIEW_CLASS_NAMES, PLUGINS];

pub const DEFAULT_HEIGHT: &str = "60vh";
pub const DEFAULT_DAY_CELL_CLASS_NAMES: &str = "@apply hover:bg-primary cursor-pointer";

/// Open-ended key/value options handed to the rendering widget.
///
/// Values are kept as JSON so that any option the widget understands can be
/// passed through without this crate knowing about it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarOptions(Map<String, Value>);

impl CalendarOptions {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Framework defaults that sit underneath any caller configuration
    pub fn framework_defaults() -> Self {
        Self::new()
            .with(HEIGHT, DEFAULT_HEIGHT)
            .with(DAY_CELL_CLASS_NAMES, DEFAULT_DAY_CELL_CLASS_NAMES)
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.to_string(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Writes every entry of `other` over `self`; keys in `other` win.
    pub fn overlay(&mut self, other: &CalendarOptions) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Splits off the entries whose keys are in `keys`.
    ///
    /// Returns the removed keys so callers can report them.
    pub fn without_keys(&self, keys: &[&str]) -> (CalendarOptions, Vec<String>) {
        let mut kept = Map::new();
        let mut dropped = Vec::new();
        for (key, value) in &self.0 {
            if keys.contains(&key.as_str()) {
                dropped.push(key.clone());
            } else {
                kept.insert(key.clone(), value.clone());
            }
        }
        (CalendarOptions(kept), dropped)
    }
}

impl From<Map<String, Value>> for CalendarOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_overlay_later_wins() {
        let mut base = CalendarOptions::framework_defaults();
        let caller = CalendarOptions::new()
            .with(HEIGHT, "auto")
            .with("firstDay", 1);

        base.overlay(&caller);

        assert_eq!(base.get_str(HEIGHT), Some("auto"));
        assert_eq!(base.get("firstDay"), Some(&json!(1)));
        assert_eq!(
            base.get_str(DAY_CELL_CLASS_NAMES),
            Some(DEFAULT_DAY_CELL_CLASS_NAMES)
        );
    }

    #[test]
    fn test_without_keys_reports_dropped() {
        let options = CalendarOptions::new()
            .with(PLUGINS, json!(["timeGrid"]))
            .with("weekends", false);

        let (kept, dropped) = options.without_keys(MANAGED_KEYS);

        assert_eq!(dropped, vec![PLUGINS.to_string()]);
        assert!(!kept.contains_key(PLUGINS));
        assert_eq!(kept.get("weekends"), Some(&json!(false)));
    }

    #[test]
    fn test_deserializes_from_object() {
        let options: CalendarOptions =
            serde_json::from_value(json!({"initialView": "dayGridMonth"})).unwrap();
        assert_eq!(options.get_str("initialView"), Some("dayGridMonth"));
        assert!(!options.contains_key(HEIGHT));
    }
}
