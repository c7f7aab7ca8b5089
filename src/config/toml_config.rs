use crate::core::render::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk configuration:
///
/// ```toml
/// [pantry]
/// default_kind = "pasta"
/// format = "json"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub pantry: PantrySection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PantrySection {
    pub default_kind: Option<String>,
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(kind) = &self.pantry.default_kind {
            validate_non_empty_string("pantry.default_kind", kind)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::PantryError;

    #[test]
    fn test_parse_full_section() {
        let config = TomlConfig::from_str(
            r#"
            [pantry]
            default_kind = "pasta"
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.pantry.default_kind.as_deref(), Some("pasta"));
        assert_eq!(config.pantry.format, Some(OutputFormat::Json));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_empty_document() {
        let config = TomlConfig::from_str("").unwrap();
        assert!(config.pantry.default_kind.is_none());
        assert!(config.pantry.format.is_none());
    }

    #[test]
    fn test_unknown_format_rejected() {
        let err = TomlConfig::from_str("[pantry]\nformat = \"yaml\"\n").unwrap_err();
        assert!(matches!(err, PantryError::TomlError(_)));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(TomlConfig::from_str("[pantry]\nrandom = true\n").is_err());
    }

    #[test]
    fn test_misspelled_section_rejected() {
        let err = TomlConfig::from_str("[pantri]\nformat = \"json\"\n").unwrap_err();
        assert!(matches!(err, PantryError::TomlError(_)));
    }

    #[test]
    fn test_blank_default_kind_fails_validation() {
        let config = TomlConfig::from_str("[pantry]\ndefault_kind = \"  \"\n").unwrap();
        assert!(config.validate().is_err());
    }
}
