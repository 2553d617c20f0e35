//! UniFFI bindings for foreign presentation layers (web views, iOS, Android).
//!
//! This module provides FFI-safe types and functions for use with UniFFI.
//! Complex types are converted to simpler representations suitable for FFI;
//! the host renders them and feeds user events back through [`FfiSession`].

use crate::group::CategoryGroup;
use crate::loader::LoadError;
use crate::model::{Catalog, Ingredient, Recipe};
use crate::session::{FindOutcome, Session};
use camino::Utf8Path;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// FFI-safe error type that wraps all possible errors.
#[derive(Debug, uniffi::Error, thiserror::Error)]
pub enum PantryError {
    #[error("Catalog source unreachable: {message}")]
    TransportError { message: String },

    #[error("Catalog document malformed: {message}")]
    SchemaError { message: String },

    #[error("Catalog integrity violation: {message}")]
    IntegrityError { message: String },

    #[error("No catalog loaded")]
    NotLoaded,
}

impl From<LoadError> for PantryError {
    fn from(e: LoadError) -> Self {
        match e {
            LoadError::Transport(e) => PantryError::TransportError {
                message: e.to_string(),
            },
            LoadError::Schema(message) => PantryError::SchemaError { message },
            e @ LoadError::Integrity { .. } => PantryError::IntegrityError {
                message: e.to_string(),
            },
            e @ LoadError::DuplicateId { .. } => PantryError::IntegrityError {
                message: e.to_string(),
            },
        }
    }
}

/// FFI-safe representation of an ingredient.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiIngredient {
    pub id: u32,
    pub name: String,
    /// Display glyph
    pub icon: String,
    /// Raw category key
    pub category: String,
}

impl From<&Ingredient> for FfiIngredient {
    fn from(ingredient: &Ingredient) -> Self {
        FfiIngredient {
            id: ingredient.id,
            name: ingredient.name.clone(),
            icon: ingredient.icon.clone(),
            category: ingredient.category.clone(),
        }
    }
}

/// FFI-safe representation of a recipe.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRecipe {
    pub id: u32,
    pub name: String,
    /// Required ingredient ids, author order
    pub ingredient_ids: Vec<u32>,
    /// Display names for `ingredient_ids`, resolved against the catalog
    pub ingredient_names: Vec<String>,
    /// Raw preparation text, line breaks preserved
    pub instructions: String,
    /// Preparation steps with the list numbering stripped
    pub steps: Vec<String>,
    pub category: String,
    pub difficulty: String,
    pub time: String,
    pub servings: u32,
    pub tags: Vec<String>,
}

impl FfiRecipe {
    fn from_recipe(recipe: &Recipe, catalog: &Catalog) -> Self {
        FfiRecipe {
            id: recipe.id,
            name: recipe.name.clone(),
            ingredient_ids: recipe.ingredients.clone(),
            ingredient_names: catalog.ingredient_names(&recipe.ingredients),
            instructions: recipe.instructions.clone(),
            steps: recipe.instruction_steps(),
            category: recipe.category.clone(),
            difficulty: recipe.difficulty.clone(),
            time: recipe.time.clone(),
            servings: recipe.servings,
            tags: recipe.tags.clone(),
        }
    }
}

/// One category of ingredients, in display order.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiIngredientGroup {
    /// Raw category key
    pub category: String,
    /// Display label (the raw key when no label is registered)
    pub label: String,
    pub ingredients: Vec<FfiIngredient>,
}

/// One category of matched recipes, in display order.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRecipeGroup {
    /// Raw category key
    pub category: String,
    /// Display label (the raw key when no label is registered)
    pub label: String,
    pub recipes: Vec<FfiRecipe>,
}

/// Result of a find-recipes request.
#[derive(Debug, Clone, uniffi::Enum)]
pub enum FfiFindOutcome {
    /// Matched recipes grouped by category
    Matches { groups: Vec<FfiRecipeGroup> },
    /// The selection covers no recipe completely; show the empty state
    NoMatches,
    /// Nothing was selected; show a dismissible notice, state unchanged
    EmptySelection,
}

/// Shared session object driven by presentation events.
///
/// UniFFI hands the object out behind an `Arc`, so interior mutability
/// goes through a mutex; the core itself is single-threaded.
#[derive(uniffi::Object)]
pub struct FfiSession {
    inner: Mutex<Session>,
}

#[uniffi::export]
impl FfiSession {
    /// Creates an empty session: no catalog, empty selection.
    #[uniffi::constructor]
    pub fn new() -> Arc<Self> {
        Arc::new(FfiSession {
            inner: Mutex::new(Session::new()),
        })
    }

    /// Creates a session with display labels for category keys.
    #[uniffi::constructor]
    pub fn with_labels(labels: HashMap<String, String>) -> Arc<Self> {
        Arc::new(FfiSession {
            inner: Mutex::new(Session::with_labels(labels.into_iter().collect())),
        })
    }

    /// Loads (or reloads) the catalog from a JSON file.
    ///
    /// On failure the previous catalog and selection stay untouched.
    pub fn load(&self, path: String) -> Result<(), PantryError> {
        self.session()
            .load(Utf8Path::new(&path))
            .map_err(PantryError::from)
    }

    /// Loads (or reloads) the catalog from JSON text.
    pub fn load_content(&self, json: String) -> Result<(), PantryError> {
        self.session()
            .load_content(&json)
            .map_err(PantryError::from)
    }

    pub fn is_loaded(&self) -> bool {
        self.session().is_loaded()
    }

    /// All catalog ingredients in document order.
    pub fn ingredients(&self) -> Result<Vec<FfiIngredient>, PantryError> {
        let session = self.session();
        let catalog = session.catalog().ok_or(PantryError::NotLoaded)?;
        Ok(catalog.ingredients().iter().map(FfiIngredient::from).collect())
    }

    /// All catalog recipes in document order.
    pub fn recipes(&self) -> Result<Vec<FfiRecipe>, PantryError> {
        let session = self.session();
        let catalog = session.catalog().ok_or(PantryError::NotLoaded)?;
        Ok(catalog
            .recipes()
            .iter()
            .map(|recipe| FfiRecipe::from_recipe(recipe, catalog))
            .collect())
    }

    /// Catalog ingredients grouped by category, render-ready.
    ///
    /// Empty before the first successful load.
    pub fn ingredient_groups(&self) -> Vec<FfiIngredientGroup> {
        let session = self.session();
        session
            .ingredient_groups()
            .into_iter()
            .map(|group| FfiIngredientGroup {
                label: session.category_label(&group.category).to_string(),
                ingredients: group.items.into_iter().map(FfiIngredient::from).collect(),
                category: group.category,
            })
            .collect()
    }

    /// Flips an ingredient in or out of the selection.
    ///
    /// Returns whether the ingredient is selected afterwards.
    pub fn toggle_ingredient(&self, id: u32) -> bool {
        self.session().toggle_ingredient(id)
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.session().selection().contains(id)
    }

    /// The selected ingredient ids, ascending for a stable order over FFI.
    pub fn selected_ingredients(&self) -> Vec<u32> {
        let session = self.session();
        let mut ids: Vec<u32> = session.selection().ids().iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Explicit selection reset. Navigating back does not call this.
    pub fn clear_selection(&self) {
        self.session().clear_selection();
    }

    /// Handles a find-recipes request against the current selection.
    pub fn find(&self) -> FfiFindOutcome {
        let session = self.session();
        match session.find() {
            FindOutcome::EmptySelection => FfiFindOutcome::EmptySelection,
            FindOutcome::NoMatches => FfiFindOutcome::NoMatches,
            FindOutcome::Matches(groups) => {
                let Some(catalog) = session.catalog() else {
                    // Matches cannot be produced without a catalog
                    return FfiFindOutcome::NoMatches;
                };
                FfiFindOutcome::Matches {
                    groups: groups
                        .into_iter()
                        .map(|group| convert_recipe_group(group, catalog, &session))
                        .collect(),
                }
            }
        }
    }
}

impl FfiSession {
    fn session(&self) -> MutexGuard<'_, Session> {
        self.inner.lock().expect("session lock poisoned")
    }
}

fn convert_recipe_group(
    group: CategoryGroup<&Recipe>,
    catalog: &Catalog,
    session: &Session,
) -> FfiRecipeGroup {
    FfiRecipeGroup {
        label: session.category_label(&group.category).to_string(),
        recipes: group
            .items
            .into_iter()
            .map(|recipe| FfiRecipe::from_recipe(recipe, catalog))
            .collect(),
        category: group.category,
    }
}

/// Returns the library version.
#[uniffi::export]
pub fn library_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const SAMPLE: &str = indoc! {r#"
        {
            "ingredientes": [
                { "id": 1, "nome": "Ovo", "icon": "egg", "categoria": "proteinas" },
                { "id": 10, "nome": "Queijo", "icon": "cheese", "categoria": "laticinios" },
                { "id": 19, "nome": "Cebola", "icon": "onion", "categoria": "vegetais" },
                { "id": 20, "nome": "Alho", "icon": "garlic", "categoria": "vegetais" }
            ],
            "receitas": [
                {
                    "id": 1,
                    "nome": "Omelete Simples",
                    "ingredientes": [1, 10, 19, 20],
                    "instrucoes": "1. Bata os ovos\n2. Cozinhe",
                    "categoria": "rapidas",
                    "dificuldade": "facil",
                    "tempo": "15 min",
                    "porcoes": 2
                }
            ]
        }
    "#};

    fn loaded_session() -> Arc<FfiSession> {
        let session = FfiSession::new();
        session.load_content(SAMPLE.to_string()).unwrap();
        session
    }

    #[test]
    fn test_session_flow() {
        let session = loaded_session();
        assert!(session.is_loaded());

        for id in [1, 10, 19, 20] {
            assert!(session.toggle_ingredient(id));
        }
        assert_eq!(session.selected_ingredients(), vec![1, 10, 19, 20]);

        match session.find() {
            FfiFindOutcome::Matches { groups } => {
                assert_eq!(groups.len(), 1);
                assert_eq!(groups[0].category, "rapidas");
                let recipe = &groups[0].recipes[0];
                assert_eq!(recipe.name, "Omelete Simples");
                assert_eq!(
                    recipe.ingredient_names,
                    vec!["Ovo", "Queijo", "Cebola", "Alho"]
                );
                assert_eq!(recipe.steps, vec!["Bata os ovos", "Cozinhe"]);
            }
            other => panic!("expected matches, got {other:?}"),
        }
    }

    #[test]
    fn test_find_with_empty_selection() {
        let session = loaded_session();
        assert!(matches!(session.find(), FfiFindOutcome::EmptySelection));
    }

    #[test]
    fn test_find_with_no_cover() {
        let session = loaded_session();
        session.toggle_ingredient(19);
        assert!(matches!(session.find(), FfiFindOutcome::NoMatches));
    }

    #[test]
    fn test_accessors_before_load() {
        let session = FfiSession::new();
        assert!(!session.is_loaded());
        assert!(matches!(
            session.ingredients(),
            Err(PantryError::NotLoaded)
        ));
        assert!(matches!(session.recipes(), Err(PantryError::NotLoaded)));
        assert!(session.ingredient_groups().is_empty());
    }

    #[test]
    fn test_load_error_kinds() {
        let session = FfiSession::new();

        let result = session.load_content("not json".to_string());
        assert!(matches!(result, Err(PantryError::SchemaError { .. })));

        let result = session.load("/nonexistent/catalog.json".to_string());
        assert!(matches!(result, Err(PantryError::TransportError { .. })));

        let dangling = indoc! {r#"
            {
                "ingredientes": [
                    { "id": 1, "nome": "Ovo", "icon": "egg", "categoria": "proteinas" }
                ],
                "receitas": [
                    {
                        "id": 1, "nome": "Omelete", "ingredientes": [999],
                        "instrucoes": "1. Bata", "categoria": "rapidas",
                        "dificuldade": "facil", "tempo": "15 min", "porcoes": 2
                    }
                ]
            }
        "#};
        let result = session.load_content(dangling.to_string());
        assert!(matches!(result, Err(PantryError::IntegrityError { .. })));
    }

    #[test]
    fn test_ingredient_groups_with_labels() {
        let labels: HashMap<String, String> =
            [("vegetais".to_string(), "Vegetais".to_string())].into();
        let session = FfiSession::with_labels(labels);
        session.load_content(SAMPLE.to_string()).unwrap();

        let groups = session.ingredient_groups();
        let by_key: HashMap<&str, &str> = groups
            .iter()
            .map(|g| (g.category.as_str(), g.label.as_str()))
            .collect();

        assert_eq!(by_key["vegetais"], "Vegetais");
        // Unlabelled categories fall back to the raw key
        assert_eq!(by_key["proteinas"], "proteinas");
    }

    #[test]
    fn test_selection_survives_failed_reload() {
        let session = loaded_session();
        session.toggle_ingredient(1);

        let result = session.load_content("broken".to_string());
        assert!(result.is_err());
        assert!(session.is_selected(1));
        assert!(session.is_loaded());
    }

    #[test]
    fn test_reload_clears_selection() {
        let session = loaded_session();
        session.toggle_ingredient(1);

        session.load_content(SAMPLE.to_string()).unwrap();
        assert!(session.selected_ingredients().is_empty());
    }

    #[test]
    fn test_library_version() {
        let version = library_version();
        assert!(!version.is_empty());
        assert_eq!(version, env!("CARGO_PKG_VERSION"));
    }
}
