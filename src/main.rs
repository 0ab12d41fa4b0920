use passforge::{shared::logging::LoggingUtils, AppConfig, LoadConfigurationUseCase};
use tracing::{error, info};

fn main() {
    // Load runtime settings
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load settings: {}", e);
            eprintln!("{}", e.to_report());
            std::process::exit(1);
        }
    };

    // Initialize logging
    if let Err(e) = LoggingUtils::initialize(&config.logging) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!(path = %config.properties_path.display(), "Loading generator configuration");

    let settings = match LoadConfigurationUseCase::from_app_config(&config).and_then(|use_case| use_case.execute()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", e.to_report());
            std::process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&settings) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => {
            error!("Failed to render configuration: {}", e);
            std::process::exit(1);
        }
    }
}
