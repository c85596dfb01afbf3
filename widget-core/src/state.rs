//! Widget UI state.
//!
//! What the panel shows is a single [`DisplayState`], so a weather summary and an
//! error line can never be visible together. Each submitted search gets a
//! [`SearchTicket`]; only the most recently issued ticket may change the display,
//! so a slow early response cannot overwrite a later search.

use serde::Serialize;

use crate::{
    error::{NOT_FOUND_MESSAGE, ProviderError, VALIDATION_MESSAGE},
    model::WeatherRecord,
    theme::Theme,
};

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum DisplayState {
    #[default]
    Idle,
    Loading,
    Ready(WeatherRecord),
    Failed(String),
}

/// Handle for one outstanding search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
    location: String,
}

impl SearchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// The trimmed location to query.
    pub fn location(&self) -> &str {
        &self.location
    }
}

/// Result of submitting the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Input was blank; the validation message is showing and nothing should be fetched.
    Rejected,
    /// Fetch `ticket.location()` and hand the outcome back to [`WidgetState::resolve`].
    Pending(SearchTicket),
}

#[derive(Debug, Clone, Default)]
pub struct WidgetState {
    location_input: String,
    display: DisplayState,
    theme: Theme,
    last_seq: u64,
}

impl WidgetState {
    pub fn new(theme: Theme) -> Self {
        Self { theme, ..Self::default() }
    }

    /// Store the raw text field value. Not validated until submission.
    pub fn set_location_input(&mut self, raw: impl Into<String>) {
        self.location_input = raw.into();
    }

    pub fn location_input(&self) -> &str {
        &self.location_input
    }

    pub fn submit(&mut self) -> Submission {
        // Any submission supersedes whatever is in flight.
        self.last_seq += 1;

        let trimmed = self.location_input.trim();
        if trimmed.is_empty() {
            self.display = DisplayState::Failed(VALIDATION_MESSAGE.to_string());
            return Submission::Rejected;
        }

        let ticket = SearchTicket { seq: self.last_seq, location: trimmed.to_string() };
        self.display = DisplayState::Loading;
        Submission::Pending(ticket)
    }

    /// Apply a fetch outcome. Returns `false` and leaves the state untouched when
    /// the ticket has been superseded.
    pub fn resolve(
        &mut self,
        ticket: &SearchTicket,
        outcome: &Result<WeatherRecord, ProviderError>,
    ) -> bool {
        if ticket.seq != self.last_seq {
            return false;
        }

        self.display = match outcome {
            Ok(record) => DisplayState::Ready(record.clone()),
            Err(_) => DisplayState::Failed(NOT_FOUND_MESSAGE.to_string()),
        };
        true
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.display, DisplayState::Loading)
    }

    pub fn current_weather(&self) -> Option<&WeatherRecord> {
        match &self.display {
            DisplayState::Ready(record) => Some(record),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.display {
            DisplayState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found() -> ProviderError {
        ProviderError::Status { status: 400, body: String::new() }
    }

    fn pending(state: &mut WidgetState, input: &str) -> SearchTicket {
        state.set_location_input(input);
        match state.submit() {
            Submission::Pending(ticket) => ticket,
            Submission::Rejected => panic!("expected a pending search for {input:?}"),
        }
    }

    #[test]
    fn starts_idle_and_not_loading() {
        let state = WidgetState::default();

        assert_eq!(state.display(), &DisplayState::Idle);
        assert!(!state.is_loading());
        assert!(state.current_weather().is_none());
        assert!(state.error_message().is_none());
    }

    #[test]
    fn input_is_stored_untrimmed() {
        let mut state = WidgetState::default();
        state.set_location_input("  Paris ");

        assert_eq!(state.location_input(), "  Paris ");
    }

    #[test]
    fn blank_input_is_rejected_with_validation_message() {
        for input in ["", " ", "\t\n  "] {
            let mut state = WidgetState::default();
            state.set_location_input(input);

            assert_eq!(state.submit(), Submission::Rejected);
            assert_eq!(state.error_message(), Some(VALIDATION_MESSAGE));
            assert!(!state.is_loading());
        }
    }

    #[test]
    fn blank_input_clears_previous_weather() {
        let mut state = WidgetState::default();
        let ticket = pending(&mut state, "Paris");
        state.resolve(&ticket, &Ok(WeatherRecord::celsius(22.0, "Sunny", "Paris")));

        state.set_location_input("   ");
        state.submit();

        assert!(state.current_weather().is_none());
        assert_eq!(state.error_message(), Some(VALIDATION_MESSAGE));
    }

    #[test]
    fn submit_trims_location_and_sets_loading() {
        let mut state = WidgetState::default();
        let ticket = pending(&mut state, "  New York  ");

        assert_eq!(ticket.location(), "New York");
        assert!(state.is_loading());
        assert!(state.error_message().is_none());
    }

    #[test]
    fn success_shows_weather_and_stops_loading() {
        let mut state = WidgetState::default();
        let ticket = pending(&mut state, "paris");
        let record = WeatherRecord::celsius(22.0, "Sunny", "Paris");

        assert!(state.resolve(&ticket, &Ok(record.clone())));
        assert_eq!(state.current_weather(), Some(&record));
        assert!(state.error_message().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn failure_shows_not_found_and_clears_weather() {
        let mut state = WidgetState::default();
        let first = pending(&mut state, "Paris");
        state.resolve(&first, &Ok(WeatherRecord::celsius(22.0, "Sunny", "Paris")));

        let second = pending(&mut state, "Atlantis");
        assert!(state.resolve(&second, &Err(not_found())));

        assert_eq!(state.error_message(), Some(NOT_FOUND_MESSAGE));
        assert!(state.current_weather().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn stale_ticket_is_discarded() {
        let mut state = WidgetState::default();
        let slow = pending(&mut state, "London");
        let fast = pending(&mut state, "Paris");
        assert!(fast.seq() > slow.seq());

        assert!(state.resolve(&fast, &Ok(WeatherRecord::celsius(22.0, "Sunny", "Paris"))));
        assert!(!state.resolve(&slow, &Ok(WeatherRecord::celsius(11.0, "Rain", "London"))));

        assert_eq!(
            state.current_weather().map(|w| w.location.as_str()),
            Some("Paris")
        );
    }

    #[test]
    fn older_result_does_not_end_newer_loading() {
        let mut state = WidgetState::default();
        let slow = pending(&mut state, "London");
        let _fast = pending(&mut state, "Paris");

        assert!(!state.resolve(&slow, &Err(not_found())));
        assert!(state.is_loading());
        assert!(state.error_message().is_none());
    }

    #[test]
    fn blank_submission_supersedes_in_flight_search() {
        let mut state = WidgetState::default();
        let ticket = pending(&mut state, "Paris");

        state.set_location_input("");
        state.submit();

        assert!(!state.resolve(&ticket, &Ok(WeatherRecord::celsius(22.0, "Sunny", "Paris"))));
        assert_eq!(state.error_message(), Some(VALIDATION_MESSAGE));
    }

    #[test]
    fn theme_toggle_leaves_weather_alone() {
        let mut state = WidgetState::new(Theme::Light);
        let ticket = pending(&mut state, "Paris");
        state.resolve(&ticket, &Ok(WeatherRecord::celsius(22.0, "Sunny", "Paris")));
        let before = state.display().clone();

        state.toggle_theme();
        assert_eq!(state.theme(), Theme::Dark);
        state.toggle_theme();

        assert_eq!(state.theme(), Theme::Light);
        assert_eq!(state.display(), &before);
    }
}
