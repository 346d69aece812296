use super::types::IngredientSet;

/// Instruction template sent to the model. Loaded from `prompt.txt` at
/// compile time so the wording can be edited without touching Rust string
/// syntax.
const RECIPE_PROMPT_TEMPLATE: &str = include_str!("prompt.txt");

const INGREDIENTS_PLACEHOLDER: &str = "{ingredients}";

/// Interpolates the ingredient list into the instruction template. Pure
/// templating; the model does all the judging.
pub fn build_prompt(ingredients: &IngredientSet) -> String {
    RECIPE_PROMPT_TEMPLATE.replace(INGREDIENTS_PLACEHOLDER, &ingredients.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> IngredientSet {
        IngredientSet::from_items(items.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_template_is_embedded() {
        assert!(RECIPE_PROMPT_TEMPLATE.contains(INGREDIENTS_PLACEHOLDER));
        assert!(RECIPE_PROMPT_TEMPLATE.contains("valid food ingredient"));
        assert!(RECIPE_PROMPT_TEMPLATE.contains("\"title\""));
        assert!(RECIPE_PROMPT_TEMPLATE.contains("\"instructions\""));
    }

    #[test]
    fn test_build_prompt_interpolates_ingredient_list() {
        let prompt = build_prompt(&set(&["egg", "flour", "butter"]));

        assert!(prompt.contains("[egg, flour, butter]"));
        assert!(!prompt.contains(INGREDIENTS_PLACEHOLDER));
    }

    #[test]
    fn test_build_prompt_demands_json_only_output() {
        let prompt = build_prompt(&set(&["egg"]));

        assert!(prompt.contains("single, complete JSON object"));
        assert!(prompt.contains("Do not include any additional text or markdown"));
    }

    #[test]
    fn test_build_prompt_names_the_error_sentinel() {
        let prompt = build_prompt(&set(&["egg"]));

        assert!(prompt.contains(r#""error": "Please enter a valid food ingredient.""#));
    }
}
