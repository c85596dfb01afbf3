//! The rendered surface of the widget.
//!
//! [`View`] is computed from [`WidgetState`] and carries everything a host needs
//! to draw the panel. Its `Display` impl renders a plain text panel.

use std::fmt;

use serde::Serialize;

use crate::{
    advice::{Icon, condition_message, icon_for, temperature_message},
    model::WeatherRecord,
    state::WidgetState,
    theme::Theme,
};

pub const TITLE: &str = "Enhanced Weather Widget";
pub const DESCRIPTION: &str = "Get current weather details and tips for your location.";
pub const PLACEHOLDER: &str = "Enter a city name";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub title: &'static str,
    pub description: &'static str,
    pub theme: Theme,
    pub container_class: &'static str,
    pub panel_class: &'static str,
    pub theme_toggle: ThemeToggle,
    pub input: InputField,
    pub submit: SubmitButton,
    pub error: Option<String>,
    pub summary: Option<Summary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeToggle {
    pub label: &'static str,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputField {
    pub placeholder: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitButton {
    pub label: &'static str,
    pub disabled: bool,
}

/// Weather block, present only while a record is showing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub temperature: Line,
    pub condition: Line,
    pub location: Line,
    pub icon: Option<Icon>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub icon: Icon,
    pub text: String,
}

impl Summary {
    pub fn from_record(record: &WeatherRecord) -> Self {
        Self {
            temperature: Line {
                icon: Icon::Thermometer,
                text: temperature_message(record.temperature, &record.unit),
            },
            condition: Line { icon: Icon::Cloud, text: condition_message(&record.description) },
            location: Line { icon: Icon::MapPin, text: record.location.clone() },
            icon: icon_for(&record.description),
        }
    }
}

impl View {
    pub fn from_state(state: &WidgetState) -> Self {
        let theme = state.theme();
        let loading = state.is_loading();

        Self {
            title: TITLE,
            description: DESCRIPTION,
            theme,
            container_class: theme.container_class(),
            panel_class: theme.panel_class(),
            theme_toggle: ThemeToggle { label: theme.toggle_label(), icon: Icon::Moon },
            input: InputField {
                placeholder: PLACEHOLDER,
                value: state.location_input().to_string(),
            },
            submit: SubmitButton {
                label: if loading { "Loading..." } else { "Search" },
                disabled: loading,
            },
            error: state.error_message().map(str::to_string),
            summary: state.current_weather().map(Summary::from_record),
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon.glyph(), self.text)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = if self.theme.is_dark() { "━" } else { "─" }.repeat(48);

        writeln!(f, "[{} {}]", self.theme_toggle.label, self.theme_toggle.icon.glyph())?;
        writeln!(f, "{rule}")?;
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;

        let value = if self.input.value.is_empty() {
            format!("<{}>", self.input.placeholder)
        } else {
            self.input.value.clone()
        };
        let submit = if self.submit.disabled {
            format!("({})", self.submit.label)
        } else {
            format!("[{}]", self.submit.label)
        };
        writeln!(f, "> {value}  {submit}")?;

        if let Some(error) = &self.error {
            writeln!(f)?;
            writeln!(f, "! {error}")?;
        }

        if let Some(summary) = &self.summary {
            writeln!(f)?;
            writeln!(f, "{}", summary.temperature)?;
            writeln!(f, "{}", summary.condition)?;
            writeln!(f, "{}", summary.location)?;
            if let Some(icon) = summary.icon {
                writeln!(f, "{}", icon.glyph())?;
            }
        }

        write!(f, "{rule}")
    }
}
