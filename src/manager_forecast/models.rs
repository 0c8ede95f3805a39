use std::fmt;
use chrono::NaiveDate;
use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One day of forecasted weather
///
/// On the wire the record carries a derived `temperatureF` besides its own fields. That value is
/// always recomputed from `temperature_c`, so it is written but never read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherForecast {
    pub date: NaiveDate,
    pub temperature_c: i32,
    pub summary: Option<String>,
}

impl WeatherForecast {
    /// Temperature in Fahrenheit, truncated towards zero and saturating at the i32 limits
    ///
    pub fn temperature_f(&self) -> i32 {
        ((self.temperature_c as f64 / 0.5556) as i32).saturating_add(32)
    }
}

impl Serialize for WeatherForecast {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("WeatherForecast", 4)?;
        state.serialize_field("date", &self.date)?;
        state.serialize_field("temperatureC", &self.temperature_c)?;
        state.serialize_field("temperatureF", &self.temperature_f())?;
        state.serialize_field("summary", &self.summary)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for WeatherForecast {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ForecastVisitor)
    }
}

/// Matches property names regardless of case, e.g. both `temperatureC` and `TemperatureC`
struct ForecastVisitor;

impl<'de> Visitor<'de> for ForecastVisitor {
    type Value = WeatherForecast;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a weather forecast object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut date: Option<NaiveDate> = None;
        let mut temperature_c: Option<i32> = None;
        let mut summary: Option<String> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.to_ascii_lowercase().as_str() {
                "date" => date = Some(map.next_value()?),
                "temperaturec" => temperature_c = Some(map.next_value()?),
                "summary" => summary = map.next_value()?,
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(WeatherForecast {
            date: date.ok_or_else(|| <A::Error as de::Error>::missing_field("date"))?,
            temperature_c: temperature_c.ok_or_else(|| <A::Error as de::Error>::missing_field("temperatureC"))?,
            summary,
        })
    }
}
