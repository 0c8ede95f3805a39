use serde_json::{json, Value};
use crate::manager_forecast::SUMMARIES;

/// Returns the OpenAPI 3.0 document describing the service
///
pub fn document() -> Value {
    json!({
        "openapi": "3.0.1",
        "info": {
            "title": "weatherforecast",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "paths": {
            "/weatherforecast": {
                "get": {
                    "operationId": "GetWeatherForecast",
                    "responses": {
                        "200": {
                            "description": "OK",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "array",
                                        "items": { "$ref": "#/components/schemas/WeatherForecast" },
                                    },
                                },
                            },
                        },
                    },
                },
            },
        },
        "components": {
            "schemas": {
                "WeatherForecast": {
                    "type": "object",
                    "required": ["date", "temperatureC", "temperatureF"],
                    "properties": {
                        "date": { "type": "string", "format": "date" },
                        "temperatureC": { "type": "integer", "format": "int32" },
                        "temperatureF": { "type": "integer", "format": "int32", "readOnly": true },
                        "summary": { "type": "string", "nullable": true, "example": SUMMARIES[4] },
                    },
                    "additionalProperties": false,
                },
            },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_forecast_endpoint() {
        let doc = document();

        assert_eq!(doc["openapi"], "3.0.1");
        assert_eq!(doc["info"]["version"], env!("CARGO_PKG_VERSION"));
        assert!(doc["paths"]["/weatherforecast"]["get"].is_object());
        let props = &doc["components"]["schemas"]["WeatherForecast"]["properties"];
        for field in ["date", "temperatureC", "temperatureF", "summary"] {
            assert!(props[field].is_object(), "missing {}", field);
        }
    }
}
