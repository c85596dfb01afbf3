use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    config::WidgetConfig,
    error::SearchError,
    provider::{WeatherApiProvider, WeatherProvider},
    state::{Submission, WidgetState},
    theme::Theme,
    view::View,
};

/// The weather widget: UI state plus the provider it searches with.
///
/// Share it behind an `Arc` to run overlapping searches; the state lock is
/// released while a request is in flight.
#[derive(Debug)]
pub struct Widget {
    state: Mutex<WidgetState>,
    provider: Arc<dyn WeatherProvider>,
}

impl Widget {
    pub fn new(provider: Arc<dyn WeatherProvider>, theme: Theme) -> Self {
        Self { state: Mutex::new(WidgetState::new(theme)), provider }
    }

    /// Widget backed by weatherapi.com, using the key and base URL from `config`.
    pub fn from_config(config: &WidgetConfig) -> Self {
        let provider = WeatherApiProvider::from_config(config);
        Self::new(Arc::new(provider), Theme::from_dark(config.dark_theme))
    }

    pub async fn set_location_input(&self, raw: impl Into<String>) {
        self.state.lock().await.set_location_input(raw);
    }

    /// Submit the current input.
    ///
    /// The returned error is informational: by the time this returns the
    /// state already shows the matching message.
    pub async fn search(&self) -> Result<(), SearchError> {
        let submission = self.state.lock().await.submit();
        self.run(submission).await
    }

    /// Replace the input and submit it in one step.
    pub async fn search_for(&self, raw: impl Into<String>) -> Result<(), SearchError> {
        let submission = {
            let mut state = self.state.lock().await;
            state.set_location_input(raw);
            state.submit()
        };
        self.run(submission).await
    }

    async fn run(&self, submission: Submission) -> Result<(), SearchError> {
        let ticket = match submission {
            Submission::Rejected => {
                tracing::debug!("rejected blank location");
                return Err(SearchError::Validation);
            }
            Submission::Pending(ticket) => ticket,
        };

        // The lock is not held here, so a newer search can start meanwhile.
        let outcome = self.provider.current(ticket.location()).await;
        if let Err(err) = &outcome {
            tracing::warn!(location = ticket.location(), error = %err, "error fetching weather data");
        }

        if !self.state.lock().await.resolve(&ticket, &outcome) {
            tracing::debug!(seq = ticket.seq(), "discarded stale search result");
        }

        outcome.map(|_| ()).map_err(SearchError::from)
    }

    pub async fn toggle_theme(&self) {
        self.state.lock().await.toggle_theme();
    }

    pub async fn snapshot(&self) -> WidgetState {
        self.state.lock().await.clone()
    }

    pub async fn view(&self) -> View {
        View::from_state(&*self.state.lock().await)
    }
}
