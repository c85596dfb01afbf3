use crate::{error::ProviderError, model::WeatherRecord};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

pub use weatherapi::WeatherApiProvider;

/// Source of current conditions for a location string.
///
/// One call is one outbound request. Implementations do not retry.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, location: &str) -> Result<WeatherRecord, ProviderError>;
}
