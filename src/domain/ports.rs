use crate::domain::model::IngredientList;

/// Source of ingredient lists.
///
/// `kind` is accepted as any value or absence. Implementations must not fail.
pub trait IngredientProvider: Send + Sync {
    fn get_random_ingredients(&self, kind: Option<&str>) -> IngredientList;
}
