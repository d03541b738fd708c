//! # flightpath Core
//!
//! Core library for the flightpath itinerary service.
//!
//! This crate provides the data structures and the ordering algorithm:
//!
//! - [`ConnectionGraph`] - directed graph constrained to simple paths
//!   (at most one inbound and one outbound connection per node)
//! - [`reconstruct`] - orders an unordered set of legs into the unique
//!   start-to-end path, rejecting branches, cycles and partitions
//! - [`AirportCode`], [`Leg`], [`FlightPath`] - the flight domain model
//!   with its wire representation
//!
//! ## Example
//!
//! ```rust
//! use flightpath_core::{FlightPath, Leg};
//!
//! let legs = vec![
//!     Leg::new("ATL", "EWR"),
//!     Leg::new("SFO", "ATL"),
//! ];
//!
//! let path = FlightPath::reconstruct(&legs).unwrap();
//! assert_eq!(path.origin.as_str(), "SFO");
//! assert_eq!(path.destination.as_str(), "EWR");
//! ```

pub mod error;
pub mod graph;
pub mod model;
pub mod route;

pub use error::{Error, Result};
pub use graph::ConnectionGraph;
pub use model::{AirportCode, FlightPath, Leg};
pub use route::{reconstruct, Route};
