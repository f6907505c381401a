use dedup_map::{ColumnProcessor, ColumnProcessorConfig, Error, DEFAULT_COLUMN_PROCESSOR_CONFIG};
use log::{error, info};
use std::env;
use std::io;

/// Builds the processor config from `[mode] [column]` command line arguments.
fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<ColumnProcessorConfig, Error> {
    let mut config = *DEFAULT_COLUMN_PROCESSOR_CONFIG;

    if let Some(mode) = args.next() {
        config.mode = mode.parse()?;
    }

    if let Some(column) = args.next() {
        config.column = column
            .parse()
            .map_err(|_| Error::ConfigError(format!("Invalid column index '{}'", column)))?;
    }

    if let Some(extra) = args.next() {
        return Err(Error::ConfigError(format!(
            "Unexpected argument '{}' (usage: dedup-map-cli [dedup|dup|dedup-int] [column])",
            extra
        )));
    }

    Ok(config)
}

fn main() {
    // Initialize the logger
    env_logger::init();

    let config = match parse_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    info!("Running with {:?}", config);

    // Read CSV from stdin and process the selected column
    let processor = ColumnProcessor::new(&config);
    match processor.process_csv(io::stdin().lock()) {
        Ok(values) => {
            for value in values {
                println!("{}", value);
            }
        }
        Err(e) => {
            error!("Error processing input: {}", e);
            std::process::exit(1);
        }
    }
}
