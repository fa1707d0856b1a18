use serde::{Deserialize, Serialize};

/// Editor configuration, injected by the host application.
///
/// The host owns where this comes from (a settings file, per-template
/// defaults); the core never reads ambient state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Name given to the category seeded when categorization is enabled on
    /// an empty taxonomy
    #[serde(default = "default_category_name")]
    pub default_category: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            default_category: default_category_name(),
        }
    }
}

fn default_category_name() -> String {
    "General".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_seed_name_is_general() {
        assert_eq!(EditorConfig::default().default_category, "General");
    }

    #[test]
    fn deserializes_from_toml_with_defaults() {
        let config: EditorConfig = toml::from_str("").unwrap();
        assert_eq!(config.default_category, "General");

        let config: EditorConfig = toml::from_str(r#"default_category = "Schedule""#).unwrap();
        assert_eq!(config.default_category, "Schedule");
    }
}
