use super::{Ingredient, Recipe};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// The loaded set of ingredients and recipes for a session.
///
/// A catalog is built by the loader after validation and never mutated
/// afterwards; a reload replaces it wholesale. Lookup by id goes through
/// index maps built at construction.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    #[serde(rename = "ingredientes")]
    ingredients: Vec<Ingredient>,
    #[serde(rename = "receitas")]
    recipes: Vec<Recipe>,

    /// id -> position in `ingredients`
    #[serde(skip)]
    ingredient_index: HashMap<u32, usize>,
    /// id -> position in `recipes`
    #[serde(skip)]
    recipe_index: HashMap<u32, usize>,
}

impl Catalog {
    /// Builds a catalog from validated parts.
    ///
    /// The loader is responsible for id uniqueness and reference checks
    /// before calling this.
    pub(crate) fn from_parts(ingredients: Vec<Ingredient>, recipes: Vec<Recipe>) -> Self {
        let ingredient_index = ingredients
            .iter()
            .enumerate()
            .map(|(position, ingredient)| (ingredient.id, position))
            .collect();
        let recipe_index = recipes
            .iter()
            .enumerate()
            .map(|(position, recipe)| (recipe.id, position))
            .collect();

        Catalog {
            ingredients,
            recipes,
            ingredient_index,
            recipe_index,
        }
    }

    /// All ingredients in document order.
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// All recipes in document order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Looks up an ingredient by id.
    pub fn ingredient(&self, id: u32) -> Option<&Ingredient> {
        self.ingredient_index
            .get(&id)
            .map(|&position| &self.ingredients[position])
    }

    /// Looks up a recipe by id.
    pub fn recipe(&self, id: u32) -> Option<&Recipe> {
        self.recipe_index
            .get(&id)
            .map(|&position| &self.recipes[position])
    }

    /// All ingredient ids present in the catalog.
    pub fn ingredient_ids(&self) -> HashSet<u32> {
        self.ingredients.iter().map(|ingredient| ingredient.id).collect()
    }

    /// Resolves ingredient ids to display names, keeping input order.
    ///
    /// Ids that are not in the catalog are skipped; for a validated
    /// recipe's `ingredients` list every id resolves.
    pub fn ingredient_names(&self, ids: &[u32]) -> Vec<String> {
        ids.iter()
            .filter_map(|&id| self.ingredient(id).map(|ingredient| ingredient.name.clone()))
            .collect()
    }
}
