use serde::{Deserialize, Serialize};

/// Light/dark style mode. Independent of weather state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Style class for the root container.
    pub fn container_class(&self) -> &'static str {
        match self {
            Theme::Light => "bg-white text-gray-800",
            Theme::Dark => "bg-gray-800 text-white",
        }
    }

    /// Style class for the inner panel.
    pub fn panel_class(&self) -> &'static str {
        match self {
            Theme::Light => "bg-gray-100",
            Theme::Dark => "bg-gray-900",
        }
    }

    /// Label of the toggle control; names the mode you switch *to*.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "Dark Mode",
            Theme::Dark => "Light Mode",
        }
    }
}
