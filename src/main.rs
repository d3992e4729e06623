use clap::Parser;
use small_calc::app;
use small_calc::utils::logger;
use small_calc::{CalcError, CliConfig, Command, Overrides, Settings, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let file = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match TomlConfig::from_file(path) {
                Ok(config) => Some(config),
                Err(e) => fail(&e),
            }
        }
        None => None,
    };

    let repository = match &cli.command {
        Command::Team { repository } => repository.clone(),
        _ => None,
    };
    let settings = Settings::resolve(
        file.as_ref(),
        Overrides {
            overflow: cli.overflow,
            repository,
        },
    );

    match app::execute(&cli.command, &settings).await {
        Ok(output) => println!("{}", output),
        Err(e) => fail(&e),
    }

    Ok(())
}

fn fail(e: &CalcError) -> ! {
    tracing::error!(
        "{} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.severity().exit_code());
}
