use crate::recipe::Recipe;

/// Explicit view state for the client: exactly one panel's worth of output
/// per state, instead of ad hoc show/hide toggling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    Loading,
    Success(Recipe),
    Error(String),
}

/// Pure render function; the caller decides where the text goes.
pub fn render(state: &ViewState) -> String {
    match state {
        ViewState::Idle => String::new(),
        ViewState::Loading => "Generating recipe...".to_string(),
        ViewState::Success(recipe) => {
            let mut out = String::new();
            out.push_str(&recipe.title);
            out.push_str("\n\nIngredients:\n");
            for ingredient in &recipe.ingredients {
                out.push_str("  - ");
                out.push_str(ingredient);
                out.push('\n');
            }
            out.push_str("\nInstructions:\n");
            for (index, step) in recipe.instructions.iter().enumerate() {
                out.push_str(&format!("  {}. {}\n", index + 1, step));
            }
            out
        }
        ViewState::Error(message) => {
            format!("Failed to generate recipe: {}. Please try again.", message)
        }
    }
}
