use serde::{Deserialize, Serialize};
use std::fmt;

/// Widget extensions the rendering collaborator loads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Plugin {
    /// Month grid rendering
    DayGrid,
    /// Pointer interaction (date clicks, selection)
    Interaction,
}

impl Plugin {
    pub fn name(self) -> &'static str {
        match self {
            Plugin::DayGrid => "dayGrid",
            Plugin::Interaction => "interaction",
        }
    }
}

impl fmt::Display for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginSet(Vec<Plugin>);

impl PluginSet {
    /// Grid and interaction, used by the built-in themes
    pub fn standard() -> Self {
        Self(vec![Plugin::DayGrid, Plugin::Interaction])
    }

    /// Grid only. Custom themes never get the interaction plugin.
    pub fn grid_only() -> Self {
        Self(vec![Plugin::DayGrid])
    }

    pub fn contains(&self, plugin: Plugin) -> bool {
        self.0.contains(&plugin)
    }

    pub fn plugins(&self) -> &[Plugin] {
        &self.0
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.0.iter().map(|p| p.name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_sets() {
        let standard = PluginSet::standard();
        assert!(standard.contains(Plugin::DayGrid));
        assert!(standard.contains(Plugin::Interaction));

        let grid = PluginSet::grid_only();
        assert_eq!(grid.plugins(), &[Plugin::DayGrid]);
        assert!(!grid.contains(Plugin::Interaction));
    }

    #[test]
    fn test_plugin_set_serializes_as_names() {
        let json = serde_json::to_value(PluginSet::standard()).unwrap();
        assert_eq!(json, serde_json::json!(["dayGrid", "interaction"]));
    }
}
