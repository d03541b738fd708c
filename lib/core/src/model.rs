use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::route;

/// An IATA-style airport code. The type itself accepts any string so that
/// malformed input can be carried to the validation boundary; callers gate
/// on [`AirportCode::is_valid`] before handing codes to the route core.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AirportCode(String);

impl AirportCode {
    #[inline]
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Exactly three ASCII letters.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.0.len() == 3 && self.0.chars().all(|c| c.is_ascii_alphabetic())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AirportCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for AirportCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

/// A single directed flight leg.
///
/// On the wire a leg is a two-element JSON array, `["SFO","ORD"]`, so
/// serialization is hand-rolled rather than derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leg {
    pub departure: AirportCode,
    pub arrival: AirportCode,
}

impl Leg {
    #[inline]
    #[must_use]
    pub fn new(departure: impl Into<AirportCode>, arrival: impl Into<AirportCode>) -> Self {
        Self {
            departure: departure.into(),
            arrival: arrival.into(),
        }
    }
}

impl Serialize for Leg {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.departure)?;
        tuple.serialize_element(&self.arrival)?;
        tuple.end()
    }
}

impl<'de> Deserialize<'de> for Leg {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let codes = Vec::<AirportCode>::deserialize(deserializer)?;
        let len = codes.len();
        let [departure, arrival] = <[AirportCode; 2]>::try_from(codes)
            .map_err(|_| de::Error::invalid_length(len, &"a [departure, arrival] pair"))?;
        Ok(Self {
            departure,
            arrival,
        })
    }
}

/// A fully ordered itinerary: where it starts, where it ends, and every
/// leg in travel order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightPath {
    pub origin: AirportCode,
    pub destination: AirportCode,
    pub legs: Vec<Leg>,
}

impl FlightPath {
    /// Reconstruct the itinerary from an unordered set of legs. Typed
    /// front door over [`route::reconstruct`].
    pub fn reconstruct(legs: &[Leg]) -> Result<Self> {
        let pairs: Vec<(AirportCode, AirportCode)> = legs
            .iter()
            .map(|leg| (leg.departure.clone(), leg.arrival.clone()))
            .collect();

        let route = route::reconstruct(&pairs)?;

        Ok(Self {
            origin: route.origin,
            destination: route.destination,
            legs: route
                .legs
                .into_iter()
                .map(|(departure, arrival)| Leg::new(departure, arrival))
                .collect(),
        })
    }
}
