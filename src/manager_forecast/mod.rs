pub mod errors;
pub mod models;

use chrono::{Days, Local, NaiveDate};
use rand::seq::IndexedRandom;
use rand::Rng;
use crate::config::Forecast;
use crate::manager_forecast::errors::ForecastError;
use crate::manager_forecast::models::WeatherForecast;

pub const SUMMARIES: [&str; 10] = [
    "Freezing", "Bracing", "Chilly", "Cool", "Mild", "Warm", "Balmy", "Hot", "Sweltering", "Scorching",
];

/// Largest absolute temperature, in Celsius, a forecast may be configured with
pub const TEMPERATURE_LIMIT_C: i32 = 1000;

/// Struct for producing synthetic weather forecasts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastGenerator {
    days: u32,
    min_temperature_c: i32,
    max_temperature_c: i32,
}

impl Default for ForecastGenerator {
    fn default() -> Self {
        let forecast = Forecast::default();
        ForecastGenerator {
            days: forecast.days,
            min_temperature_c: forecast.min_temperature_c,
            max_temperature_c: forecast.max_temperature_c,
        }
    }
}

impl ForecastGenerator {
    /// Returns a ForecastGenerator ready to produce forecasts
    ///
    /// # Arguments
    ///
    /// * 'days' - number of days in each forecast, must be at least one
    /// * 'min_temperature_c' - lowest possible temperature (inclusive)
    /// * 'max_temperature_c' - upper temperature boundary (exclusive)
    ///
    /// Both temperature boundaries must lie within +/- `TEMPERATURE_LIMIT_C`.
    pub fn new(days: u32, min_temperature_c: i32, max_temperature_c: i32) -> Result<ForecastGenerator, ForecastError> {
        if days == 0 {
            return Err(ForecastError::Config("forecast must cover at least one day".to_string()));
        }
        for t in [min_temperature_c, max_temperature_c] {
            if !(-TEMPERATURE_LIMIT_C..=TEMPERATURE_LIMIT_C).contains(&t) {
                return Err(ForecastError::Config(
                    format!("temperature {} outside +/-{}", t, TEMPERATURE_LIMIT_C)));
            }
        }
        if min_temperature_c >= max_temperature_c {
            return Err(ForecastError::Config(
                format!("empty temperature range: {}..{}", min_temperature_c, max_temperature_c)));
        }

        Ok(Self {
            days,
            min_temperature_c,
            max_temperature_c,
        })
    }

    /// Returns a ForecastGenerator from the forecast section of the configuration
    ///
    /// # Arguments
    ///
    /// * 'config' - forecast configuration
    pub fn from_config(config: &Forecast) -> Result<ForecastGenerator, ForecastError> {
        Self::new(config.days, config.min_temperature_c, config.max_temperature_c)
    }

    /// Produces a forecast starting tomorrow, local time
    ///
    pub fn forecast(&self) -> Result<Vec<WeatherForecast>, ForecastError> {
        self.forecast_from(Local::now().date_naive(), &mut rand::rng())
    }

    /// Produces one forecast record per day following the given date.
    ///
    /// # Arguments
    ///
    /// * 'today' - the day before the first forecasted day
    /// * 'rng' - source of temperatures and summaries
    pub fn forecast_from<R: Rng>(&self, today: NaiveDate, rng: &mut R) -> Result<Vec<WeatherForecast>, ForecastError> {
        let mut forecast: Vec<WeatherForecast> = Vec::with_capacity(self.days as usize);

        for index in 1..=self.days {
            let date = today.checked_add_days(Days::new(index as u64))
                .ok_or_else(|| ForecastError::Date(format!("{} plus {} days is out of range", today, index)))?;

            forecast.push(WeatherForecast {
                date,
                temperature_c: rng.random_range(self.min_temperature_c..self.max_temperature_c),
                summary: SUMMARIES.choose(rng).map(|s| s.to_string()),
            });
        }

        Ok(forecast)
    }
}
