use clap::Parser;
use pantry::utils::logger;
use pantry::{get_random_ingredients, render, CliConfig, PantryError, Settings};

fn run(cli: &CliConfig) -> Result<String, PantryError> {
    let settings = Settings::load(cli)?;

    let ingredients = get_random_ingredients(settings.kind.as_deref());
    tracing::info!("Got {} ingredients as {}", ingredients.len(), settings.format);

    render(&ingredients, settings.format)
}

/// Status the process exits with for a given outcome.
fn exit_code(result: &Result<String, PantryError>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let result = run(&cli);
    match &result {
        Ok(out) => print!("{}", out),
        Err(e) => {
            tracing::error!("❌ Failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
        }
    }

    let code = exit_code(&result);
    if code > 0 {
        std::process::exit(code);
    }
}
