//! Fetch lifecycle of the greeting view.

use crate::api::{fetch_greeting, ApiError, GreetingResponse, Transport};

/// Exactly one of: still waiting, failed with a message, or holding a response.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    #[default]
    Loading,
    Failed {
        message: String,
    },
    Succeeded {
        response: GreetingResponse,
    },
}

impl FetchState {
    /// Terminal state for a finished fetch. Failures are logged here.
    pub fn settle(outcome: Result<GreetingResponse, ApiError>) -> Self {
        match outcome {
            Ok(response) => {
                log::debug!("greeting received: version {}", response.version);
                FetchState::Succeeded { response }
            }
            Err(err) => {
                log::error!("Error fetching data: {}", err);
                FetchState::Failed {
                    message: err.user_message(),
                }
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchState::Failed { message } => Some(message),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&GreetingResponse> {
        match self {
            FetchState::Succeeded { response } => Some(response),
            _ => None,
        }
    }
}

/// Runs one fetch to completion. Never returns `Loading`.
pub async fn load_greeting<T: Transport>(transport: &T, url: &str) -> FetchState {
    log::info!("fetching greeting from {}", url);
    FetchState::settle(fetch_greeting(transport, url).await)
}
