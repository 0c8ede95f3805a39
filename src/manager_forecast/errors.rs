use std::fmt;

#[derive(Debug)]
pub enum ForecastError {
    Config(String),
    Date(String),
}

impl fmt::Display for ForecastError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ForecastError::Config(e) => write!(f, "ForecastError::Config: {}", e),
            ForecastError::Date(e) => write!(f, "ForecastError::Date: {}", e),
        }
    }
}
