//! Session state and the event-facing entry points.
//!
//! A [`Session`] owns the loaded catalog and the current selection, and
//! consumes the events a presentation layer emits: load/reload, ingredient
//! toggles, and find-recipes requests. It hands back render-ready grouped
//! data; how that data is drawn is the host's business.

use crate::group::{group_by_category, CategoryGroup, CategoryLabels};
use crate::loader::{load_catalog, parse_catalog, LoadError};
use crate::matcher::matching_recipes;
use crate::model::{Catalog, Ingredient, Recipe};
use crate::selection::SelectionSet;
use camino::Utf8Path;
use tracing::{debug, warn};

/// Result of a find-recipes request.
#[derive(Debug, PartialEq, Eq)]
pub enum FindOutcome<'a> {
    /// Matched recipes, grouped by category for rendering
    Matches(Vec<CategoryGroup<&'a Recipe>>),
    /// The selection covers no recipe completely
    NoMatches,
    /// Find was requested with nothing selected. No matching ran and no
    /// state changed; the user can select ingredients and try again.
    EmptySelection,
}

/// One user session: the loaded catalog plus the current selection.
///
/// A session starts in the not-loaded state with an empty selection. All
/// mutation happens through the methods below, driven by discrete UI
/// events, so there is never a half-updated view of the state.
#[derive(Debug, Default)]
pub struct Session {
    catalog: Option<Catalog>,
    selection: SelectionSet,
    labels: CategoryLabels,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with display labels for category keys.
    pub fn with_labels(labels: CategoryLabels) -> Self {
        Session {
            labels,
            ..Self::default()
        }
    }

    /// Loads (or reloads) the catalog from a JSON document on disk.
    ///
    /// The new catalog is swapped in only after it loads and validates
    /// completely; on failure the previous catalog and selection are left
    /// untouched. A successful load clears the selection, since its ids
    /// belong to the replaced catalog.
    pub fn load(&mut self, source: &Utf8Path) -> Result<(), LoadError> {
        let catalog = load_catalog(source)?;
        self.install(catalog);
        Ok(())
    }

    /// String-source twin of [`Session::load`], for hosts that fetch the
    /// document over their own transport.
    pub fn load_content(&mut self, json: &str) -> Result<(), LoadError> {
        let catalog = parse_catalog(json)?;
        self.install(catalog);
        Ok(())
    }

    fn install(&mut self, catalog: Catalog) {
        debug!(
            ingredients = catalog.ingredients().len(),
            recipes = catalog.recipes().len(),
            "catalog installed"
        );
        self.catalog = Some(catalog);
        self.selection.clear();
    }

    pub fn is_loaded(&self) -> bool {
        self.catalog.is_some()
    }

    /// The loaded catalog, if any.
    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Flips an ingredient in or out of the selection.
    ///
    /// Returns whether the ingredient is selected afterwards.
    pub fn toggle_ingredient(&mut self, id: u32) -> bool {
        self.selection.toggle(id)
    }

    /// Explicit selection reset.
    ///
    /// Navigating back from the results view does NOT clear the selection;
    /// only a reload or this call does.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// The display label for a category key (raw key when unmapped).
    pub fn category_label<'a>(&'a self, key: &'a str) -> &'a str {
        self.labels.label(key)
    }

    /// The catalog's ingredients grouped by category, render-ready.
    ///
    /// Empty before the first successful load.
    pub fn ingredient_groups(&self) -> Vec<CategoryGroup<&Ingredient>> {
        match &self.catalog {
            Some(catalog) => {
                group_by_category(catalog.ingredients().iter(), |ingredient| {
                    &ingredient.category
                })
            }
            None => Vec::new(),
        }
    }

    /// Handles a find-recipes request against the current selection.
    ///
    /// An empty selection short-circuits to [`FindOutcome::EmptySelection`]
    /// without running the matcher; otherwise matched recipes come back
    /// grouped by category, or [`FindOutcome::NoMatches`] when the
    /// selection covers none.
    pub fn find(&self) -> FindOutcome<'_> {
        if self.selection.is_empty() {
            warn!("find requested with empty selection");
            return FindOutcome::EmptySelection;
        }

        let matched = match &self.catalog {
            Some(catalog) => matching_recipes(catalog, self.selection.ids()),
            None => Vec::new(),
        };

        if matched.is_empty() {
            return FindOutcome::NoMatches;
        }
        FindOutcome::Matches(group_by_category(matched, |recipe| &recipe.category))
    }
}
