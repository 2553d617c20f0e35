use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

/// A recipe from the catalog.
///
/// `ingredients` holds the required ingredient ids in the order the author
/// listed them; the id set used for matching is cached on first use.
/// Equality and hashing go by `id`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique identifier within a catalog
    pub id: u32,
    #[serde(rename = "nome")]
    pub name: String,
    /// Required ingredient ids, author order
    #[serde(rename = "ingredientes")]
    pub ingredients: Vec<u32>,
    /// Preparation text, one step per line
    #[serde(rename = "instrucoes")]
    pub instructions: String,
    /// Category key used for grouping
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "dificuldade")]
    pub difficulty: String,
    #[serde(rename = "tempo")]
    pub time: String,
    #[serde(rename = "porcoes")]
    pub servings: u32,
    /// Free-form tags; absent in older documents
    #[serde(default)]
    pub tags: Vec<String>,

    /// Cached set view of `ingredients`
    #[serde(skip)]
    ingredient_set: OnceLock<HashSet<u32>>,
}

impl Clone for Recipe {
    fn clone(&self) -> Self {
        Recipe {
            id: self.id,
            name: self.name.clone(),
            ingredients: self.ingredients.clone(),
            instructions: self.instructions.clone(),
            category: self.category.clone(),
            difficulty: self.difficulty.clone(),
            time: self.time.clone(),
            servings: self.servings,
            tags: self.tags.clone(),
            // Reset cached fields - they will be recomputed on demand
            ingredient_set: OnceLock::new(),
        }
    }
}

impl PartialEq for Recipe {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Recipe {}

impl Hash for Recipe {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Recipe {
    /// Returns the required ingredient ids as a set.
    ///
    /// The result is cached after the first call.
    pub fn ingredient_set(&self) -> &HashSet<u32> {
        self.ingredient_set
            .get_or_init(|| self.ingredients.iter().copied().collect())
    }

    /// Splits `instructions` into individual preparation steps.
    ///
    /// Instructions arrive as a single string with one step per line,
    /// usually carrying `1.`-style numbering. The numbering and blank
    /// lines are dropped; steps keep their original order.
    pub fn instruction_steps(&self) -> Vec<String> {
        static STEP_PREFIX: OnceLock<Regex> = OnceLock::new();
        let prefix = STEP_PREFIX.get_or_init(|| Regex::new(r"^\s*\d+\s*[.)]\s*").unwrap());

        self.instructions
            .lines()
            .map(|line| prefix.replace(line, "").trim().to_string())
            .filter(|step| !step.is_empty())
            .collect()
    }
}
