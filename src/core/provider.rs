use crate::core::{IngredientList, IngredientProvider, INGREDIENTS};

/// Provider that always hands back [`INGREDIENTS`], whatever `kind` is asked for.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedIngredientProvider;

impl FixedIngredientProvider {
    pub fn new() -> Self {
        Self
    }
}

impl IngredientProvider for FixedIngredientProvider {
    fn get_random_ingredients(&self, kind: Option<&str>) -> IngredientList {
        // kind is accepted but not used
        tracing::debug!(?kind, "Providing ingredients");
        INGREDIENTS.into_iter().collect()
    }
}

/// Returns `["shells", "gorgonzola", "parsley"]`.
///
/// Despite the name the result is constant: `kind` is ignored and the call never fails.
pub fn get_random_ingredients(kind: Option<&str>) -> IngredientList {
    FixedIngredientProvider.get_random_ingredients(kind)
}
