//! mjc_options: Symbol table configuration.
//!
//! Parses `mjc.json` files. Every field is optional; anything left out
//! falls back to the behavior of the reference front end.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// How scopes are printed for dumps and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    /// Print the members of a class between its braces. Off by default,
    /// which keeps the class body empty.
    pub class_members: bool,
    /// Appended after each variable and method member.
    pub member_terminator: String,
    /// Spaces per nesting level for class members.
    pub indent_width: usize,
    /// Print `extends <Super>` in class headers.
    pub show_superclass: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            class_members: false,
            member_terminator: ";".to_string(),
            indent_width: 4,
            show_superclass: false,
        }
    }
}

impl RenderOptions {
    /// Options with member rendering switched on and everything else default.
    pub fn with_members() -> Self {
        Self {
            class_members: true,
            ..Self::default()
        }
    }
}

/// The `mjc.json` file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymtabConfig {
    pub render: Option<RenderOptions>,
}

impl SymtabConfig {
    /// The effective render options.
    pub fn render_options(&self) -> RenderOptions {
        self.render.clone().unwrap_or_default()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a config file from a string.
pub fn parse_config(content: &str) -> Result<SymtabConfig, serde_json::Error> {
    serde_json::from_str(content)
}

/// Parse a config file from a path.
pub fn parse_config_file(path: impl AsRef<Path>) -> Result<SymtabConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("{}").unwrap();
        assert!(config.render.is_none());
        assert_eq!(config.render_options(), RenderOptions::default());
    }

    #[test]
    fn test_partial_render_section() {
        let config = parse_config(r#"{ "render": { "classMembers": true, "indentWidth": 2 } }"#).unwrap();
        let render = config.render_options();
        assert!(render.class_members);
        assert_eq!(render.indent_width, 2);
        assert_eq!(render.member_terminator, ";");
        assert!(!render.show_superclass);
    }

    #[test]
    fn test_invalid_json() {
        assert!(parse_config(r#"{ "render": { "classMembers": "yes" } }"#).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = parse_config_file("/definitely/not/here/mjc.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
