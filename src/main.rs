use std::io;
use std::process::ExitCode;

use bikeshare_stats::config::DatasetConfig;
use bikeshare_stats::console::Console;
use bikeshare_stats::ingestion::IngestionOptions;
use bikeshare_stats::session::Session;

fn main() -> ExitCode {
    env_logger::init();

    let base = DatasetConfig {
        message_delay_ms: 700,
        ..Default::default()
    };
    let config = match DatasetConfig::from_env(base) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::debug!("config: {config:?}");

    let console = Console::new(io::stdin().lock(), io::stdout().lock(), config.message_delay());
    let mut session = Session::new(&config, console, IngestionOptions::logged());
    match session.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
