pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{toml_config::TomlConfig, CliConfig, Settings};
pub use crate::core::provider::{get_random_ingredients, FixedIngredientProvider};
pub use crate::core::render::{render, OutputFormat};
pub use crate::domain::model::{IngredientList, INGREDIENTS};
pub use crate::domain::ports::IngredientProvider;
pub use crate::utils::error::{PantryError, Result};
