//! Advisory text and icons derived from weather data.
//!
//! Everything here is pure: no I/O, no widget state.

use serde::Serialize;

use crate::model::CELSIUS;

/// Glyphs used by the widget panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Sun,
    /// Shown for rain.
    Umbrella,
    Thermometer,
    Cloud,
    MapPin,
    Moon,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Sun => "☀",
            Icon::Umbrella => "☂",
            Icon::Thermometer => "🌡",
            Icon::Cloud => "☁",
            Icon::MapPin => "📍",
            Icon::Moon => "☾",
        }
    }
}

/// Advice sentence for a temperature. Bands are checked in order, lower bound inclusive.
pub fn temperature_message(temperature: f64, unit: &str) -> String {
    let t = format_number(temperature);

    if unit != CELSIUS {
        return format!("{t}°{unit}");
    }

    if temperature < 0.0 {
        format!("It's freezing at {t}°C! Stay indoors if possible.")
    } else if temperature < 10.0 {
        format!("Quite cold at {t}°C. Dress warmly with layers.")
    } else if temperature < 20.0 {
        format!("A cool {t}°C. A light jacket should be enough.")
    } else if temperature < 30.0 {
        format!("It's {t}°C, pleasantly warm. Perfect for outdoor activities!")
    } else {
        format!("It's extremely hot at {t}°C! Avoid strenuous outdoor activities.")
    }
}

/// Advice for a condition label; unknown labels pass through unchanged.
pub fn condition_message(description: &str) -> String {
    match description.to_lowercase().as_str() {
        "sunny" => "Sunny and bright. Wear sunglasses and sunscreen!".to_string(),
        "rain" => "Rainy day. Don't forget your umbrella and a waterproof jacket.".to_string(),
        _ => description.to_string(),
    }
}

pub fn icon_for(description: &str) -> Option<Icon> {
    match description.to_lowercase().as_str() {
        "sunny" => Some(Icon::Sun),
        "rain" => Some(Icon::Umbrella),
        _ => None,
    }
}

// Shortest form: 22 not 22.0, and no "-0".
fn format_number(value: f64) -> String {
    if value == 0.0 { "0".to_string() } else { value.to_string() }
}
