use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::config;
use crate::config::Config;
use crate::errors::InitError;
use crate::manager_gismeteo::Gismeteo;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

/// Initializes and returns the configuration and the forecast site manager
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn init(config_path: &str) -> Result<(Config, Gismeteo), InitError> {
    let config = config::load_config(config_path)?;

    setup_logging(&config)?;

    // Print version
    println!("meteoreport version: {}", env!("CARGO_PKG_VERSION"));

    // Instantiate structs
    let gismeteo = Gismeteo::new(&config.source)?;

    Ok((config, gismeteo))
}

/// Sets up logging to file, and optionally also to stdout
///
/// # Arguments
///
/// * 'config' - the loaded configuration
fn setup_logging(config: &Config) -> Result<(), InitError> {
    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(&config.general.log_path)?;

    let mut builder = log4rs::config::Config::builder()
        .appender(Appender::builder().build("file", Box::new(file)));
    let mut root = Root::builder().appender("file");

    if config.general.log_to_stdout {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();
        builder = builder.appender(Appender::builder().build("stdout", Box::new(stdout)));
        root = root.appender("stdout");
    }

    let log_config = builder.build(root.build(config.general.log_level))?;
    log4rs::init_config(log_config)?;

    Ok(())
}
