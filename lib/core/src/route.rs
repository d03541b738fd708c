use std::fmt::Display;
use std::hash::Hash;

use crate::error::{Error, Result};
use crate::graph::ConnectionGraph;

/// An assembled route: the unique start, the unique end, and the legs in
/// travel order. Built fresh per call to [`reconstruct`] and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<T> {
    pub origin: T,
    pub destination: T,
    pub legs: Vec<(T, T)>,
}

/// Reconstruct the unique simple path through an unordered set of legs.
///
/// Inserts every pair into a fresh [`ConnectionGraph`], failing fast on the
/// first invariant violation, then walks from the no-inbound node to the
/// no-outbound node emitting legs in order. Insertion alone cannot catch
/// partitioned input (two disjoint chains are each locally valid), so the
/// walk checks that it covered every supplied leg before accepting.
///
/// The result is the same for every permutation of `pairs`; only the leg
/// reported by a duplicate error depends on insertion order.
pub fn reconstruct<T>(pairs: &[(T, T)]) -> Result<Route<T>>
where
    T: Eq + Hash + Clone + Display,
{
    if pairs.is_empty() {
        return Err(Error::EmptyItinerary);
    }

    let mut graph = ConnectionGraph::with_capacity(pairs.len());
    for (from, to) in pairs {
        graph.add_connection(from.clone(), to.clone())?;
    }

    let origin = graph.find_start()?.clone();
    let destination = graph.find_end()?.clone();

    let mut legs = Vec::with_capacity(graph.len());
    let mut current = origin.clone();
    while let Some(next) = graph.next(&current) {
        legs.push((current, next.clone()));
        current = next.clone();
    }

    // The walk stops at whichever sink is reachable from `origin`. Anything
    // short of the full leg count means a second chain was never reached.
    if current != destination || legs.len() != graph.len() {
        return Err(Error::Disconnected(current.to_string()));
    }

    Ok(Route {
        origin,
        destination,
        legs,
    })
}
