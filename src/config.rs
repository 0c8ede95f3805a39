use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;
use crate::manager_forecast::ForecastGenerator;

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct WebServer {
    pub bind_address: String,
    pub bind_port: u16,
}

impl Default for WebServer {
    fn default() -> Self {
        WebServer {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 8080,
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Forecast {
    pub days: u32,
    pub min_temperature_c: i32,
    pub max_temperature_c: i32,
}

impl Default for Forecast {
    fn default() -> Self {
        Forecast {
            days: 5,
            min_temperature_c: -20,
            max_temperature_c: 55,
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct General {
    pub log_path: String,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
    pub expose_openapi: bool,
}

impl Default for General {
    fn default() -> Self {
        General {
            log_path: "weatherforecast.log".to_string(),
            log_level: LevelFilter::Info,
            log_to_stdout: true,
            expose_openapi: true,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub web_server: WebServer,
    pub forecast: Forecast,
    pub general: General,
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {
    let toml = fs::read_to_string(config_path)?;

    parse_config(&toml)
}

/// Parses and validates configuration given as a toml string
///
/// The forecast section is validated by building a `ForecastGenerator` from it.
///
/// # Arguments
///
/// * 'toml' - the configuration document
pub fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(toml)?;
    let _ = ForecastGenerator::from_config(&config.forecast)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = parse_config("").unwrap();

        assert_eq!(config.web_server.bind_address, "127.0.0.1");
        assert_eq!(config.web_server.bind_port, 8080);
        assert_eq!(config.forecast.days, 5);
        assert_eq!(config.forecast.min_temperature_c, -20);
        assert_eq!(config.forecast.max_temperature_c, 55);
        assert_eq!(config.general.log_level, LevelFilter::Info);
        assert!(config.general.expose_openapi);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = parse_config(r#"
            [web_server]
            bind_port = 9090

            [general]
            log_level = "debug"
            expose_openapi = false
        "#).unwrap();

        assert_eq!(config.web_server.bind_address, "127.0.0.1");
        assert_eq!(config.web_server.bind_port, 9090);
        assert_eq!(config.general.log_level, LevelFilter::Debug);
        assert!(!config.general.expose_openapi);
        assert!(config.general.log_to_stdout);
    }

    #[test]
    fn rejects_zero_days() {
        let res = parse_config("[forecast]\ndays = 0\n");
        assert!(res.is_err());
    }

    #[test]
    fn rejects_empty_temperature_range() {
        let res = parse_config("[forecast]\nmin_temperature_c = 30\nmax_temperature_c = 30\n");
        assert!(res.is_err());
    }

    #[test]
    fn rejects_unphysical_temperatures() {
        let res = parse_config("[forecast]\nmin_temperature_c = 1900000000\nmax_temperature_c = 2000000000\n");
        assert!(res.is_err());
    }

    #[test]
    fn accepted_config_builds_generator() {
        let documents = [
            "",
            "[forecast]\ndays = 1\n",
            "[forecast]\ndays = 14\nmin_temperature_c = -1000\nmax_temperature_c = 1000\n",
            "[forecast]\nmin_temperature_c = 0\nmax_temperature_c = 1\n",
        ];

        for doc in documents {
            let config = parse_config(doc).unwrap();
            let generator = ForecastGenerator::from_config(&config.forecast).unwrap();
            let forecast = generator.forecast().unwrap();
            assert_eq!(forecast.len(), config.forecast.days as usize);
            assert!(serde_json::to_string(&forecast).is_ok());
        }
    }

    #[test]
    fn rejects_malformed_toml() {
        let res = parse_config("[web_server\nbind_port = 1");
        assert!(res.is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let res = load_config("/nonexistent/weatherforecast.toml");
        assert!(res.is_err());
    }
}
