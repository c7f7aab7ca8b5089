pub mod provider;
pub mod render;

pub use crate::domain::model::{IngredientList, INGREDIENTS};
pub use crate::domain::ports::IngredientProvider;
pub use crate::utils::error::Result;
