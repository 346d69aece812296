mod extract;
mod prompt;
mod types;

pub use extract::extract;
pub use prompt::build_prompt;
pub use types::{IngredientSet, Recipe, RecipeOutcome};
