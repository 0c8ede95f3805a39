use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Handle;
use crate::errors::ConfigError;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

/// Sets up the global logger
///
/// # Arguments
///
/// * 'log_path' - file to append log lines to
/// * 'log_level' - the most verbose level that gets logged
/// * 'log_to_stdout' - whether to also log to stdout
pub fn setup_logger(log_path: &str, log_level: LevelFilter, log_to_stdout: bool) -> Result<Handle, ConfigError> {
    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(log_path)?;

    let mut builder = Config::builder()
        .appender(Appender::builder().build("file", Box::new(file)));
    let mut root = Root::builder().appender("file");

    if log_to_stdout {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();
        builder = builder.appender(Appender::builder().build("stdout", Box::new(stdout)));
        root = root.appender("stdout");
    }

    let config = builder.build(root.build(log_level))?;

    Ok(log4rs::init_config(config)?)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use log::info;
    use super::*;

    // Installs the global logger, so this is the only test that may succeed in calling setup_logger
    #[test]
    fn logs_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("weatherforecast.log");
        let path = path.to_str().unwrap();

        setup_logger(path, LevelFilter::Info, false).unwrap();
        info!("forecast service log line");

        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("INFO"));
        assert!(content.contains("forecast service log line"));
    }

    #[test]
    fn directory_as_log_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();

        let res = setup_logger(dir.path().to_str().unwrap(), LevelFilter::Info, true);
        assert!(res.is_err());
    }
}
