use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every variant is a deterministic, input-driven validation failure.
/// Nothing here is transient or retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Empty itinerary: no flight legs supplied")]
    EmptyItinerary,

    #[error("Invalid leg: departure and arrival are both {0}")]
    SelfLoop(String),

    #[error("Invalid leg: {0} already has an outbound connection")]
    DuplicateOutbound(String),

    #[error("Invalid leg: {0} already has an inbound connection")]
    DuplicateInbound(String),

    #[error("Unable to find the itinerary start: loop detected")]
    NoStartFound,

    #[error("Unable to find the itinerary end: loop detected")]
    NoEndFound,

    #[error("Disconnected itinerary: walk stranded at {0}")]
    Disconnected(String),
}
