use std::collections::HashMap;

/// Items sharing one category, in the order they appeared in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<T> {
    /// Raw category key
    pub category: String,
    /// Group members, input order preserved
    pub items: Vec<T>,
}

impl<T> CategoryGroup<T> {
    pub(crate) fn new(category: String) -> Self {
        CategoryGroup {
            category,
            items: Vec::new(),
        }
    }
}

/// Display labels for category keys.
///
/// Purely data-driven: unknown keys fall back to the raw key, so a host can
/// register labels for any subset of its categories, or none at all.
#[derive(Debug, Clone, Default)]
pub struct CategoryLabels {
    labels: HashMap<String, String>,
}

impl CategoryLabels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a display label for a category key.
    pub fn insert(&mut self, key: impl Into<String>, label: impl Into<String>) {
        self.labels.insert(key.into(), label.into());
    }

    /// The display label for `key`, or the raw key when none is registered.
    pub fn label<'a>(&'a self, key: &'a str) -> &'a str {
        self.labels.get(key).map(String::as_str).unwrap_or(key)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CategoryLabels {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        CategoryLabels {
            labels: iter
                .into_iter()
                .map(|(key, label)| (key.into(), label.into()))
                .collect(),
        }
    }
}
