//! # flightpath API
//!
//! REST shell for the flightpath itinerary service. The single
//! `POST /calculate` endpoint binds the JSON request, validates airport
//! codes, and hands the legs to `flightpath-core`; every core error maps
//! to a 400 with a structured, non-retryable error body.

pub mod rest;

pub use rest::RestApi;
