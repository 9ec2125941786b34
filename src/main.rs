use adopt_match::config::{LoggingSettings, Settings};
use adopt_match::core::Matcher;
use adopt_match::error::AppError;
use adopt_match::models::ErrorResponse;
use adopt_match::runner::{execute, load_settings, read_request, CONFIG_PATH_VAR};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

fn run(settings: &Settings) -> Result<(), AppError> {
    if let Some(threads) = settings.matching.worker_threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
        info!("Scoring pool sized to {} worker threads", threads);
    }

    let matcher = Matcher::new(settings.matching.options());
    info!("Matcher initialized with options: {:?}", matcher.options());

    // Read the request from the path argument, or stdin when absent or "-"
    let request = match std::env::args().nth(1).filter(|path| path != "-") {
        Some(path) => {
            info!("Reading request from {}", path);
            read_request(BufReader::new(File::open(path)?))?
        }
        None => read_request(io::stdin().lock())?,
    };

    let response = execute(&matcher, request, &settings.matching)?;

    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, &response)?;
    writeln!(stdout)?;
    Ok(())
}

fn report_failure(e: &AppError) -> ExitCode {
    error!("Match run failed: {}", e);
    let body = ErrorResponse {
        error: e.code().to_string(),
        message: e.to_string(),
    };
    if let Ok(json) = serde_json::to_string(&body) {
        println!("{}", json);
    }
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let config_path = std::env::var(CONFIG_PATH_VAR).ok();
    let settings = match load_settings(config_path.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            // Logging is not configured yet
            init_logging(&LoggingSettings::default());
            return report_failure(&e);
        }
    };

    init_logging(&settings.logging);
    info!("Configuration loaded successfully");

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_failure(&e),
    }
}
