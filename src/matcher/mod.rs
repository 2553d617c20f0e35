//! Subset-containment recipe matching.

use crate::model::{Catalog, Recipe};
use std::collections::HashSet;
use tracing::debug;

/// Returns true when every ingredient the recipe needs is in `selected`.
///
/// Containment is one-directional: selected ingredients the recipe does not
/// use never disqualify a match. A recipe with no required ingredients
/// matches any selection.
pub fn recipe_matches(recipe: &Recipe, selected: &HashSet<u32>) -> bool {
    recipe.ingredient_set().iter().all(|id| selected.contains(id))
}

/// Filters the catalog down to recipes fully covered by `selected`.
///
/// The result preserves catalog recipe order (stable filter, never
/// re-sorted). An empty selection deterministically yields an empty result;
/// callers that want to warn the user instead should check before calling
/// (see [`crate::session::Session::find`]).
pub fn matching_recipes<'a>(catalog: &'a Catalog, selected: &HashSet<u32>) -> Vec<&'a Recipe> {
    if selected.is_empty() {
        return Vec::new();
    }

    let matched: Vec<&Recipe> = catalog
        .recipes()
        .iter()
        .filter(|recipe| recipe_matches(recipe, selected))
        .collect();

    debug!(
        selected = selected.len(),
        matched = matched.len(),
        "matched recipes against selection"
    );
    matched
}
