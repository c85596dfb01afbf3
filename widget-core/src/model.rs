use serde::{Deserialize, Serialize};

/// The only unit label the widget produces.
pub const CELSIUS: &str = "C";

/// Current conditions for one location, normalized from the provider response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub temperature: f64,
    pub description: String,
    /// Display name as resolved by the provider, not the user's input.
    pub location: String,
    pub unit: String,
}

impl WeatherRecord {
    pub fn celsius(
        temperature: f64,
        description: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            temperature,
            description: description.into(),
            location: location.into(),
            unit: CELSIUS.to_string(),
        }
    }
}
