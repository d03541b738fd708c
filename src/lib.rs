//! # flightpath
//!
//! A small HTTP service that takes an unordered set of flight legs and
//! reconstructs the one simple itinerary through them: origin,
//! destination, and every leg in travel order.
//!
//! The hard part lives in the core: a connection graph that enforces
//! "at most one inbound and one outbound connection per airport" on
//! insertion, and a walker that orders the legs while detecting cycles
//! and partitioned input. The HTTP layer is a thin shell over it.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! flightpath --port 8080
//! curl -X POST localhost:8080/calculate \
//!   -H 'content-type: application/json' \
//!   -d '{"flight_legs": [["ATL","EWR"], ["SFO","ATL"]]}'
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use flightpath::prelude::*;
//!
//! let legs = vec![
//!     Leg::new("IND", "EWR"),
//!     Leg::new("SFO", "ATL"),
//!     Leg::new("GSO", "IND"),
//!     Leg::new("ATL", "GSO"),
//! ];
//!
//! let path = FlightPath::reconstruct(&legs).unwrap();
//! assert_eq!(path.origin.as_str(), "SFO");
//! assert_eq!(path.destination.as_str(), "EWR");
//! ```
//!
//! ## Crate Structure
//!
//! - `flightpath-core` - connection graph, route ordering, domain model
//! - `flightpath-api` - actix-web REST endpoint

// Re-export core types
pub use flightpath_core::{
    reconstruct, AirportCode, ConnectionGraph, Error, FlightPath, Leg, Result, Route,
};

// Re-export API
pub use flightpath_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        reconstruct, AirportCode, ConnectionGraph, Error, FlightPath, Leg, RestApi, Result,
        Route,
    };
}
