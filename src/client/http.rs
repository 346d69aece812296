use crate::{
    Error, Result,
    recipe::{IngredientSet, Recipe, RecipeOutcome},
};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct FailureBody {
    message: String,
}

/// One POST to the server, classified into the same outcomes the server
/// reports: a recipe, the model's "not food" verdict (which arrives with a
/// 2xx status and must be read out of the body), or a transport failure.
pub async fn submit(base_url: &str, ingredients: &IngredientSet) -> Result<RecipeOutcome> {
    let url = format!("{}/generate-recipe", base_url.trim_end_matches('/'));

    debug!("Submitting {} ingredient(s) to {}", ingredients.len(), url);

    let response = reqwest::Client::new()
        .post(&url)
        .json(&json!({ "ingredients": ingredients.as_slice() }))
        .send()
        .await?;

    let status = response.status();

    if !status.is_success() {
        let message = response
            .json::<FailureBody>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| format!("HTTP error! status: {}", status));
        return Err(Error::transport(message));
    }

    let body: serde_json::Value = response.json().await?;

    if let Some(message) = body.get("error").and_then(serde_json::Value::as_str) {
        return Ok(RecipeOutcome::Rejected {
            message: message.to_string(),
        });
    }

    let recipe: Recipe = serde_json::from_value(body)?;
    Ok(RecipeOutcome::Recipe(recipe))
}
