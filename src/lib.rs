pub mod ffi;
pub mod group;
pub mod loader;
pub mod matcher;
pub mod model;
pub mod selection;
pub mod session;

pub use group::{group_by_category, CategoryGroup, CategoryLabels};
pub use loader::{load_catalog, parse_catalog, LoadError};
pub use matcher::{matching_recipes, recipe_matches};
pub use model::*;
pub use selection::SelectionSet;
pub use session::{FindOutcome, Session};

uniffi::setup_scaffolding!();
