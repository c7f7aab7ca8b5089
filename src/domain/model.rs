use serde::Serialize;
use std::ops::Deref;

/// The fixed ingredients, in the order they are always returned.
pub const INGREDIENTS: [&str; 3] = ["shells", "gorgonzola", "parsley"];

/// Ordered, duplicate-permitting list of ingredient names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IngredientList(Vec<String>);

impl IngredientList {
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl Deref for IngredientList {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> FromIterator<&'a str> for IngredientList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_string).collect())
    }
}

impl IntoIterator for IngredientList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a IngredientList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<const N: usize> PartialEq<[&str; N]> for IngredientList {
    fn eq(&self, other: &[&str; N]) -> bool {
        self.0.len() == N && self.0.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl PartialEq<Vec<&str>> for IngredientList {
    fn eq(&self, other: &Vec<&str>) -> bool {
        self.0.len() == other.len() && self.0.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}
