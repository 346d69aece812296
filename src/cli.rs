use anyhow::Result;
use clap::Parser;
use recipegen::client::{self, ViewState};
use recipegen::recipe::RecipeOutcome;

#[derive(Parser)]
#[command(name = "recipegen-cli")]
#[command(about = "Generate a recipe from a list of ingredients", long_about = None)]
struct Cli {
    /// Comma-separated ingredient list, e.g. "egg, flour, butter"
    #[arg(long, default_value = "")]
    ingredients: String,

    /// Add one of the common ingredients (repeatable)
    #[arg(long = "common", value_parser = client::parse_common)]
    common: Vec<String>,

    /// Server URL (default: http://localhost:3000)
    #[arg(long, default_value = "http://localhost:3000")]
    server: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Nothing leaves this process until the ingredient set is valid.
    let ingredients = match client::collect(&cli.ingredients, &cli.common) {
        Ok(ingredients) => ingredients,
        Err(_) => {
            eprintln!("Please enter or select at least one ingredient.");
            std::process::exit(1);
        }
    };

    println!("{}", client::render(&ViewState::Loading));

    // One request per invocation; the final state always replaces the
    // loading indicator, whatever the outcome.
    let state = match client::submit(&cli.server, &ingredients).await {
        Ok(RecipeOutcome::Recipe(recipe)) => ViewState::Success(recipe),
        Ok(RecipeOutcome::Rejected { message }) => ViewState::Error(message),
        Err(recipegen::Error::Transport(message)) => ViewState::Error(message),
        Err(e) => ViewState::Error(e.to_string()),
    };

    let failed = matches!(state, ViewState::Error(_));
    println!("{}", client::render(&state));

    if failed {
        std::process::exit(1);
    }

    Ok(())
}
