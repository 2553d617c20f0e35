use serde::{Deserialize, Serialize};

/// A single selectable ingredient from the catalog.
///
/// The catalog wire document carries Portuguese field names; the serde
/// renames map them onto the Rust-side names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ingredient {
    /// Unique, stable identifier within a catalog
    pub id: u32,
    /// Display name
    #[serde(rename = "nome")]
    pub name: String,
    /// Display glyph shown next to the name
    pub icon: String,
    /// Category key used for grouping
    #[serde(rename = "categoria")]
    pub category: String,
}
