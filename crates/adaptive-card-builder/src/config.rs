use std::env;

use serde::{Deserialize, Serialize};

use crate::document::DEFAULT_SCHEMA_VERSION;
use crate::errors::{CardError, CardResult};

pub const SCHEMA_VERSION_ENV: &str = "ADAPTIVE_CARD_SCHEMA_VERSION";
pub const INDENT_ENV: &str = "ADAPTIVE_CARD_INDENT";
pub const DEFAULT_INDENT: usize = 2;

fn default_schema_version() -> String {
    DEFAULT_SCHEMA_VERSION.to_string()
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

/// Defaults applied when building and printing cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuilderConfig {
    #[serde(default = "default_schema_version")]
    pub schema_version: String,
    #[serde(default = "default_indent")]
    pub indent: usize,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            indent: DEFAULT_INDENT,
        }
    }
}

impl BuilderConfig {
    /// Reads overrides from `ADAPTIVE_CARD_SCHEMA_VERSION` and `ADAPTIVE_CARD_INDENT`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`BuilderConfig::from_env`] with an explicit variable source.
    /// Unparseable or out-of-range values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(version) = lookup(SCHEMA_VERSION_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| is_schema_version(value))
        {
            config.schema_version = version;
        }
        if let Some(indent) = lookup(INDENT_ENV)
            .and_then(|value| value.trim().parse::<usize>().ok())
            .filter(|indent| *indent > 0)
        {
            config.indent = indent;
        }
        config
    }

    pub fn validate(&self) -> CardResult<()> {
        if self.indent == 0 {
            return Err(CardError::InvalidIndent(self.indent));
        }
        if !is_schema_version(&self.schema_version) {
            return Err(CardError::Config(format!(
                "schema version must look like `major.minor`, got `{}`",
                self.schema_version
            )));
        }
        Ok(())
    }
}

fn is_schema_version(value: &str) -> bool {
    let mut parts = value.split('.');
    let (Some(major), Some(minor), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    [major, minor]
        .iter()
        .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        let config = BuilderConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, BuilderConfig::default());
        assert_eq!(config.schema_version, "1.2");
        assert_eq!(config.indent, 2);
    }

    #[test]
    fn variables_override_defaults() {
        let config = BuilderConfig::from_lookup(lookup_from(&[
            (SCHEMA_VERSION_ENV, " 1.5 "),
            (INDENT_ENV, "4"),
        ]));
        assert_eq!(config.schema_version, "1.5");
        assert_eq!(config.indent, 4);
    }

    #[test]
    fn invalid_variables_are_ignored() {
        let config = BuilderConfig::from_lookup(lookup_from(&[
            (SCHEMA_VERSION_ENV, "latest"),
            (INDENT_ENV, "0"),
        ]));
        assert_eq!(config, BuilderConfig::default());
    }

    #[test]
    fn deserializes_partial_config() {
        let config: BuilderConfig = serde_json::from_str(r#"{"indent": 3}"#).expect("parse");
        assert_eq!(config.indent, 3);
        assert_eq!(config.schema_version, DEFAULT_SCHEMA_VERSION);
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(serde_json::from_str::<BuilderConfig>(r#"{"color": "red"}"#).is_err());
    }

    #[test]
    fn validate_checks_indent_and_version() {
        assert!(BuilderConfig::default().validate().is_ok());
        let zero = BuilderConfig {
            indent: 0,
            ..BuilderConfig::default()
        };
        assert!(matches!(zero.validate(), Err(CardError::InvalidIndent(0))));
        let bad = BuilderConfig {
            schema_version: "1.x".into(),
            ..BuilderConfig::default()
        };
        assert!(matches!(bad.validate(), Err(CardError::Config(_))));
    }
}
