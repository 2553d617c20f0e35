//! Catalog loading and validation.
//!
//! This module turns a JSON catalog document into a validated [`Catalog`],
//! or a typed [`LoadError`] describing exactly what went wrong. No partial
//! catalog ever escapes: the document is parsed and every reference checked
//! before the catalog is built.

use crate::model::{Catalog, Ingredient, Recipe};
use camino::Utf8Path;
use serde_json::Value;
use std::collections::HashSet;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading a catalog document.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read catalog document: {0}")]
    Transport(#[from] std::io::Error),

    #[error("Catalog document is malformed: {0}")]
    Schema(String),

    #[error("Recipe \"{recipe}\" references unknown ingredient id {ingredient}")]
    Integrity { recipe: String, ingredient: u32 },

    #[error("Duplicate {kind} id {id} in catalog")]
    DuplicateId { kind: &'static str, id: u32 },
}

/// Loads and validates a catalog from a JSON document on disk.
///
/// # Errors
///
/// Returns [`LoadError::Transport`] when the document cannot be read,
/// [`LoadError::Schema`] when it is not shaped like a catalog, and
/// [`LoadError::Integrity`] / [`LoadError::DuplicateId`] when the data
/// contradicts itself.
pub fn load_catalog(path: &Utf8Path) -> Result<Catalog, LoadError> {
    let raw = std::fs::read_to_string(path)?;
    let catalog = parse_catalog(&raw)?;
    debug!(source = %path, "catalog loaded");
    Ok(catalog)
}

/// Parses and validates a catalog from JSON text.
///
/// The string-source twin of [`load_catalog`], for hosts that fetch the
/// document over their own transport.
pub fn parse_catalog(json: &str) -> Result<Catalog, LoadError> {
    let mut document: Value = serde_json::from_str(json)
        .map_err(|e| LoadError::Schema(format!("invalid JSON: {e}")))?;

    let ingredients = take_list(&mut document, "ingredientes")?;
    let recipes = take_list(&mut document, "receitas")?;

    let ingredients: Vec<Ingredient> = serde_json::from_value(Value::Array(ingredients))
        .map_err(|e| LoadError::Schema(format!("invalid `ingredientes` entry: {e}")))?;
    let recipes: Vec<Recipe> = serde_json::from_value(Value::Array(recipes))
        .map_err(|e| LoadError::Schema(format!("invalid `receitas` entry: {e}")))?;

    validate(&ingredients, &recipes)?;

    debug!(
        ingredients = ingredients.len(),
        recipes = recipes.len(),
        "catalog validated"
    );
    Ok(Catalog::from_parts(ingredients, recipes))
}

/// Pulls a required top-level list field out of the document.
fn take_list(document: &mut Value, field: &str) -> Result<Vec<Value>, LoadError> {
    let object = document
        .as_object_mut()
        .ok_or_else(|| LoadError::Schema("top level is not an object".to_string()))?;

    match object.remove(field) {
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(LoadError::Schema(format!("`{field}` is not a list"))),
        None => Err(LoadError::Schema(format!("missing `{field}` field"))),
    }
}

/// Checks id uniqueness and that every recipe reference resolves.
fn validate(ingredients: &[Ingredient], recipes: &[Recipe]) -> Result<(), LoadError> {
    let mut ingredient_ids = HashSet::new();
    for ingredient in ingredients {
        if !ingredient_ids.insert(ingredient.id) {
            return Err(LoadError::DuplicateId {
                kind: "ingredient",
                id: ingredient.id,
            });
        }
    }

    let mut recipe_ids = HashSet::new();
    for recipe in recipes {
        if !recipe_ids.insert(recipe.id) {
            return Err(LoadError::DuplicateId {
                kind: "recipe",
                id: recipe.id,
            });
        }
        for &ingredient in &recipe.ingredients {
            if !ingredient_ids.contains(&ingredient) {
                return Err(LoadError::Integrity {
                    recipe: recipe.name.clone(),
                    ingredient,
                });
            }
        }
    }

    Ok(())
}
