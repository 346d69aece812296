use super::types::{FailureResponse, GenerateRecipeRequest, RejectionResponse};
use crate::{
    Error,
    llm::ModelClient,
    recipe::{self, IngredientSet, RecipeOutcome},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn ModelClient>,
}

pub async fn generate_recipe(
    State(state): State<AppState>,
    Json(request): Json<GenerateRecipeRequest>,
) -> Response {
    let ingredients = match IngredientSet::from_items(request.ingredients) {
        Ok(ingredients) => ingredients,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(FailureResponse::new(
                    "Please provide at least one ingredient.",
                )),
            )
                .into_response();
        }
    };

    info!(
        "Received recipe request for {} ingredient(s)",
        ingredients.len()
    );

    let prompt = recipe::build_prompt(&ingredients);

    let text = match state.model.generate(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            error!("Error generating recipe with model: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FailureResponse::new(
                    "Error generating recipe. Please try again later.",
                )),
            )
                .into_response();
        }
    };

    match recipe::extract(&text) {
        Ok(RecipeOutcome::Recipe(recipe)) => {
            info!("Successfully generated recipe: {}", recipe.title);
            (StatusCode::OK, Json(recipe)).into_response()
        }
        Ok(RecipeOutcome::Rejected { message }) => {
            info!("Model rejected the ingredient list: {}", message);
            (StatusCode::OK, Json(RejectionResponse { error: message })).into_response()
        }
        Err(Error::Extraction { message, raw }) => {
            error!("Could not extract recipe JSON: {}", message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(
                    FailureResponse::new(
                        "Could not parse recipe from AI. Please try again or refine ingredients.",
                    )
                    .with_raw_response(raw),
                ),
            )
                .into_response()
        }
        Err(Error::Shape { data, .. }) => {
            error!("Model returned an unexpected recipe format");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(
                    FailureResponse::new("AI returned an unexpected recipe format.")
                        .with_data(data),
                ),
            )
                .into_response()
        }
        Err(e) => {
            error!("Unexpected failure while processing model output: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FailureResponse::new(
                    "Error generating recipe. Please try again later.",
                )),
            )
                .into_response()
        }
    }
}
