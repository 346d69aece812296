use super::types::{Recipe, RecipeOutcome};
use crate::{Error, Result};
use serde_json::Value;
use tracing::error;

/// Recovers a structured recipe from free-form model output. The model is
/// told to emit a single JSON object, but in practice the object may arrive
/// wrapped in prose or markdown fences, so the object is located with a
/// balanced-brace scan before parsing.
pub fn extract(text: &str) -> Result<RecipeOutcome> {
    let span = match find_json_object(text) {
        Some(span) => span,
        None => {
            error!("No JSON object found in model response");
            return Err(Error::extraction("no JSON object found", text));
        }
    };

    let value: Value = match serde_json::from_str(span) {
        Ok(value) => value,
        Err(e) => {
            error!("Failed to parse extracted JSON: {}", e);
            return Err(Error::extraction(format!("malformed JSON: {}", e), text));
        }
    };

    // An "error" key is the model's food-validity verdict, not a failure of
    // this pipeline.
    if let Some(message) = value.get("error").and_then(Value::as_str) {
        return Ok(RecipeOutcome::Rejected {
            message: message.to_string(),
        });
    }

    recipe_from_value(&value).map(RecipeOutcome::Recipe)
}

/// Returns the first balanced `{...}` span in `text`, skipping braces inside
/// JSON string literals. Scanning starts at the first `{`; if that object
/// never closes, no span is reported.
fn find_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}

fn recipe_from_value(value: &Value) -> Result<Recipe> {
    let title = value
        .get("title")
        .and_then(Value::as_str)
        .filter(|title| !title.is_empty());
    let ingredients = value.get("ingredients").and_then(Value::as_array);
    let instructions = value.get("instructions").and_then(Value::as_array);

    let (Some(title), Some(ingredients), Some(instructions)) = (title, ingredients, instructions)
    else {
        error!("Model returned an unexpected recipe shape: {}", value);
        return Err(Error::shape("unexpected recipe format", value.clone()));
    };

    let ingredients = string_items(ingredients, value)?;
    let instructions = string_items(instructions, value)?;

    Ok(Recipe {
        title: title.to_string(),
        ingredients,
        instructions,
    })
}

fn string_items(items: &[Value], context: &Value) -> Result<Vec<String>> {
    items
        .iter()
        .map(|item| {
            item.as_str().map(String::from).ok_or_else(|| {
                error!("Non-string entry in recipe sequence: {}", item);
                Error::shape("unexpected recipe format", context.clone())
            })
        })
        .collect()
}
