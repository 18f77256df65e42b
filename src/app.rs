use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use crate::application::FileAnalysisUseCase;
use crate::infrastructure::config::ConfigService;
use crate::interfaces::cli::{run_cli, Cli};

pub fn run() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config_service = match &cli.config {
        Some(path) => ConfigService::with_file(path),
        None => ConfigService::new(),
    };
    let config = match config_service.load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err.user_message());
            std::process::exit(2);
        }
    };

    let level = if cli.verbose { "debug" } else { config.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let use_case = FileAnalysisUseCase::new(config);
    debug!(
        config_file = ?cli.config,
        top_words_limit = use_case.config().top_words_limit,
        preview_rows = use_case.config().preview_rows,
        "Configuration loaded"
    );
    match run_cli(&cli, &use_case) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            error!(error = %err, "Run failed");
            eprintln!("{}", err.user_message());
            std::process::exit(1);
        }
    }
}
