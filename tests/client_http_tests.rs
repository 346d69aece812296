use pretty_assertions::assert_eq;
use recipegen::Error;
use recipegen::client;
use recipegen::recipe::{IngredientSet, RecipeOutcome};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ingredients(items: &[&str]) -> IngredientSet {
    IngredientSet::from_items(items.iter().map(|s| s.to_string()).collect()).unwrap()
}

#[tokio::test]
async fn test_submit_decodes_a_successful_recipe() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate-recipe"))
        .and(body_json(json!({ "ingredients": ["egg", "flour"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title": "Simple Pancakes",
            "ingredients": ["Eggs (2)", "Flour (200g)"],
            "instructions": ["Whisk everything.", "Fry in batches."]
        })))
        .mount(&server)
        .await;

    let outcome = client::submit(&server.uri(), &ingredients(&["egg", "flour"]))
        .await
        .unwrap();

    match outcome {
        RecipeOutcome::Recipe(recipe) => {
            assert_eq!(recipe.title, "Simple Pancakes");
            assert_eq!(recipe.ingredients.len(), 2);
        }
        other => panic!("expected a recipe, got {:?}", other),
    }
}

#[tokio::test]
async fn test_submit_reads_the_error_field_out_of_a_2xx_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate-recipe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": "Please enter a valid food ingredient."
        })))
        .mount(&server)
        .await;

    let outcome = client::submit(&server.uri(), &ingredients(&["car keys"]))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        RecipeOutcome::Rejected {
            message: "Please enter a valid food ingredient.".to_string(),
        }
    );
}

#[tokio::test]
async fn test_submit_surfaces_the_server_failure_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate-recipe"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "message": "Error generating recipe. Please try again later."
        })))
        .mount(&server)
        .await;

    let result = client::submit(&server.uri(), &ingredients(&["egg"])).await;

    match result {
        Err(Error::Transport(message)) => {
            assert_eq!(message, "Error generating recipe. Please try again later.");
        }
        other => panic!("expected a transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_submit_falls_back_to_the_status_code_when_the_body_is_opaque() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate-recipe"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let result = client::submit(&server.uri(), &ingredients(&["egg"])).await;

    match result {
        Err(Error::Transport(message)) => {
            assert!(message.contains("502"), "unexpected message: {}", message);
        }
        other => panic!("expected a transport error, got {:?}", other),
    }
}
