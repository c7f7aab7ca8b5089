// Ingredient list type and the provider trait.

pub mod model;
pub mod ports;
