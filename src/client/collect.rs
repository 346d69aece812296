use crate::{Result, recipe::IngredientSet};

/// Fixed checkbox-style choices offered alongside the free-text field.
pub const COMMON_INGREDIENTS: &[&str] = &[
    "Chicken", "Rice", "Pasta", "Tomatoes", "Onions", "Garlic", "Potatoes", "Eggs",
];

/// Merges the free-text field with the selected common ingredients. Fails
/// before any network call when nothing usable was entered.
pub fn collect(text: &str, selections: &[String]) -> Result<IngredientSet> {
    IngredientSet::collect(text, selections)
}

/// clap value parser for `--common`; only the fixed choices are accepted.
pub fn parse_common(value: &str) -> std::result::Result<String, String> {
    COMMON_INGREDIENTS
        .iter()
        .find(|choice| choice.eq_ignore_ascii_case(value))
        .map(|choice| choice.to_string())
        .ok_or_else(|| {
            format!(
                "unknown common ingredient '{}'; choices: {}",
                value,
                COMMON_INGREDIENTS.join(", ")
            )
        })
}
