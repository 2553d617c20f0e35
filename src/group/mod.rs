//! Order-preserving grouping by category.
//!
//! One generic grouper serves both ingredients and recipes; callers pass
//! the category-extraction function for their item type.

use std::collections::HashMap;

mod model;
pub use model::{CategoryGroup, CategoryLabels};

/// Groups `items` by the category `category_of` extracts.
///
/// Groups appear in the order their category is first seen while scanning
/// left to right; within a group, items keep their input order. Every item
/// lands in exactly one group, so concatenating the groups yields the input
/// reordered only by category adjacency.
pub fn group_by_category<T, F>(
    items: impl IntoIterator<Item = T>,
    category_of: F,
) -> Vec<CategoryGroup<T>>
where
    F: Fn(&T) -> &str,
{
    let mut groups: Vec<CategoryGroup<T>> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for item in items {
        let category = category_of(&item);
        let position = match positions.get(category) {
            Some(&position) => position,
            None => {
                positions.insert(category.to_string(), groups.len());
                groups.push(CategoryGroup::new(category.to_string()));
                groups.len() - 1
            }
        };
        groups[position].items.push(item);
    }

    groups
}
