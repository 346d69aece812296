use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Ordered, deduplicated list of normalized ingredient strings submitted in
/// one request. Invariant: never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientSet(Vec<String>);

impl IngredientSet {
    /// Merges free text (comma-separated) with pre-selected staples, text
    /// items first. Duplicates are matched case-sensitively and the first
    /// occurrence wins.
    pub fn collect(text: &str, selections: &[String]) -> Result<Self> {
        let mut items: Vec<String> = text
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(String::from)
            .collect();

        for selection in selections {
            let selection = selection.trim();
            if !selection.is_empty() && !items.iter().any(|item| item == selection) {
                items.push(selection.to_string());
            }
        }

        Self::from_items(items)
    }

    /// Normalizes an already-split list, as received over the wire.
    pub fn from_items(items: Vec<String>) -> Result<Self> {
        let mut normalized: Vec<String> = Vec::with_capacity(items.len());

        for item in items {
            let item = item.trim();
            if !item.is_empty() && !normalized.iter().any(|existing| existing == item) {
                normalized.push(item.to_string());
            }
        }

        if normalized.is_empty() {
            return Err(Error::validation("no ingredients provided"));
        }

        Ok(Self(normalized))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn join(&self, separator: &str) -> String {
        self.0.join(separator)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

/// What a successful extraction yields: either a recipe, or the model's
/// verdict that the input was not food. The rejection is a business outcome,
/// not a system error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeOutcome {
    Recipe(Recipe),
    Rejected { message: String },
}
