//! Recipe Book binary entry point.
//!
//! Logs go to stderr; command output goes to stdout.

// Enable the coverage attribute when running with nightly for llvm-cov exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use recipe_book::cli::{help_text, RecipeCommand};
use recipe_book::config::Config;
use recipe_book::duration::{is_valid_duration, parse_iso8601_duration, pretty_print_duration};
use recipe_book::error::AppError;
use recipe_book::pagination::PaginationRequest;
use recipe_book::recipes::RecipeService;
use recipe_book::storage::{NewRecipe, SqliteStorage};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            config
                .log_level
                .parse()
                .unwrap_or_else(|_| tracing_subscriber::filter::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match RecipeCommand::parse(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(command, &config).await {
        tracing::error!("{e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
async fn run(command: RecipeCommand, config: &Config) -> Result<(), AppError> {
    match command {
        RecipeCommand::Help => print!("{}", help_text()),

        RecipeCommand::Duration { duration } => {
            let parsed = parse_iso8601_duration(Some(&duration))?;
            println!("{}", pretty_print_duration(&parsed));
        }

        RecipeCommand::Validate { duration } => {
            let verdict = if is_valid_duration(Some(&duration)) {
                "valid"
            } else {
                "invalid"
            };
            println!("{verdict}");
        }

        RecipeCommand::Add {
            title,
            prep_time,
            cook_time,
            total_time,
            submitted_by,
        } => {
            let service = open_service(config).await?;
            let recipe = NewRecipe {
                title,
                description: None,
                prep_time,
                cook_time,
                total_time,
                submitted_by,
            };
            let stored = service.add_recipe(&recipe).await?;
            tracing::info!(recipe_id = %stored.id, "Recipe saved");
            println!("{}", stored.id);
        }

        RecipeCommand::List { page, page_size } => {
            let service = open_service(config).await?;
            let defaults = PaginationRequest::default();
            let request = PaginationRequest::new(
                page.unwrap_or(defaults.page),
                page_size.unwrap_or(config.page_size),
            );
            let result = service.list_recipes(request).await?;
            match serde_json::to_string_pretty(&result) {
                Ok(json) => println!("{json}"),
                Err(e) => tracing::error!("Failed to serialize page: {e}"),
            }
        }
    }

    Ok(())
}

#[cfg_attr(coverage_nightly, coverage(off))]
async fn open_service(config: &Config) -> Result<RecipeService<SqliteStorage>, AppError> {
    let path = config.database_path();
    tracing::info!("Opening database at {}", path.display());
    let storage = SqliteStorage::new(&path).await?;
    Ok(RecipeService::new(storage))
}
