mod catalog;
mod ingredient;
mod recipe;

pub use catalog::Catalog;
pub use ingredient::Ingredient;
pub use recipe::Recipe;
