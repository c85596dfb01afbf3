//! Core library for the weather widget.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The weather provider abstraction and its weatherapi.com client
//! - Advisory text for temperatures and conditions
//! - Widget state, the search orchestrator and the rendered view
//!
//! It is used by the `weather-widget` binary, but any host that can draw a [`View`]
//! can drive a [`Widget`].

pub mod advice;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod state;
pub mod theme;
pub mod view;
pub mod widget;

pub use advice::{Icon, condition_message, icon_for, temperature_message};
pub use config::WidgetConfig;
pub use error::{ProviderError, SearchError};
pub use model::WeatherRecord;
pub use provider::{WeatherApiProvider, WeatherProvider};
pub use state::{DisplayState, SearchTicket, Submission, WidgetState};
pub use theme::Theme;
pub use view::View;
pub use widget::Widget;
