use crate::core::{IngredientList, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One ingredient per line
    #[default]
    Text,
    /// A JSON array
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

pub fn render(list: &IngredientList, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for item in list {
                out.push_str(item);
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Json => Ok(serde_json::to_string(list)?),
    }
}
