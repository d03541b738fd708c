use std::fmt::Display;
use std::hash::Hash;

use ahash::{AHashMap, AHashSet};

use crate::error::{Error, Result};

/// A directed graph restricted to a disjoint union of simple paths: every
/// node has at most one inbound and at most one outbound connection.
///
/// The restriction is enforced, not merely checked. [`ConnectionGraph::add_connection`]
/// refuses any insertion that would give a node a second edge in either
/// direction, so branch and duplicate detection is an O(1) map lookup
/// instead of a traversal.
///
/// Node identity is opaque: anything hashable, comparable and printable
/// works. Each graph is a short-lived value owned by a single calculation;
/// nothing is shared between invocations.
#[derive(Debug, Clone)]
pub struct ConnectionGraph<T> {
    nodes: AHashSet<T>,
    outbound: AHashMap<T, T>,
    inbound: AHashMap<T, T>,
}

impl<T> ConnectionGraph<T>
where
    T: Eq + Hash + Clone + Display,
{
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: AHashSet::new(),
            outbound: AHashMap::new(),
            inbound: AHashMap::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_capacity(legs: usize) -> Self {
        Self {
            nodes: AHashSet::with_capacity(legs + 1),
            outbound: AHashMap::with_capacity(legs),
            inbound: AHashMap::with_capacity(legs),
        }
    }

    /// Record a directed connection `from -> to`.
    ///
    /// Fails without mutating anything when the connection is a self-loop,
    /// when `from` already has an outbound edge, or when `to` already has
    /// an inbound edge. Registering an already-known node is fine.
    pub fn add_connection(&mut self, from: T, to: T) -> Result<()> {
        if from == to {
            return Err(Error::SelfLoop(from.to_string()));
        }
        if self.outbound.contains_key(&from) {
            return Err(Error::DuplicateOutbound(from.to_string()));
        }
        if self.inbound.contains_key(&to) {
            return Err(Error::DuplicateInbound(to.to_string()));
        }

        self.nodes.insert(from.clone());
        self.nodes.insert(to.clone());

        self.outbound.insert(from.clone(), to.clone());
        self.inbound.insert(to, from);

        Ok(())
    }

    /// The unique node with no inbound connection. When every known node
    /// has one, the graph forms a closed loop and there is no start.
    pub fn find_start(&self) -> Result<&T> {
        self.nodes
            .iter()
            .find(|node| !self.inbound.contains_key(*node))
            .ok_or(Error::NoStartFound)
    }

    /// The unique node with no outbound connection, symmetric to
    /// [`ConnectionGraph::find_start`].
    pub fn find_end(&self) -> Result<&T> {
        self.nodes
            .iter()
            .find(|node| !self.outbound.contains_key(*node))
            .ok_or(Error::NoEndFound)
    }

    /// The outbound neighbor of `node`, or `None` at the end of a chain.
    /// Not an error: walkers use the `None` to detect where a chain stops.
    #[inline]
    pub fn next(&self, node: &T) -> Option<&T> {
        self.outbound.get(node)
    }

    /// Number of recorded connections. Inbound and outbound counts are
    /// equal in any fully inserted graph, but insertion failure can leave
    /// them transiently unequal, so take the max.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inbound.len().max(self.outbound.len())
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for ConnectionGraph<T>
where
    T: Eq + Hash + Clone + Display,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_connection_rejects_self_loop() {
        let mut graph = ConnectionGraph::new();
        let err = graph.add_connection("foo", "foo").unwrap_err();
        assert_eq!(err, Error::SelfLoop("foo".to_string()));
        assert!(graph.is_empty());
    }

    #[test]
    fn test_add_connection_rejects_second_outbound() {
        let mut graph = ConnectionGraph::new();
        graph.add_connection("foo", "bar").unwrap();

        let err = graph.add_connection("foo", "baz").unwrap_err();
        assert_eq!(err, Error::DuplicateOutbound("foo".to_string()));
    }

    #[test]
    fn test_add_connection_rejects_second_inbound() {
        let mut graph = ConnectionGraph::new();
        graph.add_connection("foo", "bar").unwrap();

        let err = graph.add_connection("baz", "bar").unwrap_err();
        assert_eq!(err, Error::DuplicateInbound("bar".to_string()));
    }

    #[test]
    fn test_add_connection_rejects_exact_duplicate() {
        let mut graph = ConnectionGraph::new();
        graph.add_connection("foo", "bar").unwrap();

        // The duplicate trips the outbound check first.
        let err = graph.add_connection("foo", "bar").unwrap_err();
        assert_eq!(err, Error::DuplicateOutbound("foo".to_string()));
    }

    #[test]
    fn test_failed_insertion_leaves_graph_untouched() {
        let mut graph = ConnectionGraph::new();
        graph.add_connection("a", "b").unwrap();
        assert!(graph.add_connection("a", "c").is_err());

        assert_eq!(graph.len(), 1);
        assert_eq!(graph.next(&"a"), Some(&"b"));
        assert_eq!(graph.next(&"c"), None);
    }

    #[test]
    fn test_find_start() {
        let mut graph = ConnectionGraph::new();
        graph.add_connection("c", "d").unwrap();
        graph.add_connection("a", "b").unwrap();
        graph.add_connection("b", "c").unwrap();

        assert_eq!(graph.find_start().unwrap(), &"a");
    }

    #[test]
    fn test_find_start_fails_on_loop() {
        let mut graph = ConnectionGraph::new();
        graph.add_connection("a", "b").unwrap();
        graph.add_connection("b", "c").unwrap();
        graph.add_connection("c", "d").unwrap();
        graph.add_connection("d", "a").unwrap();

        assert_eq!(graph.find_start().unwrap_err(), Error::NoStartFound);
    }

    #[test]
    fn test_find_end() {
        let mut graph = ConnectionGraph::new();
        graph.add_connection("b", "c").unwrap();
        graph.add_connection("d", "e").unwrap();
        graph.add_connection("a", "b").unwrap();
        graph.add_connection("c", "d").unwrap();

        assert_eq!(graph.find_end().unwrap(), &"e");
    }

    #[test]
    fn test_find_end_fails_on_loop() {
        let mut graph = ConnectionGraph::new();
        graph.add_connection("a", "b").unwrap();
        graph.add_connection("b", "c").unwrap();
        graph.add_connection("c", "a").unwrap();

        assert_eq!(graph.find_end().unwrap_err(), Error::NoEndFound);
    }

    #[test]
    fn test_next_walks_the_chain() {
        let mut graph = ConnectionGraph::new();
        graph.add_connection("d", "e").unwrap();
        graph.add_connection("b", "c").unwrap();
        graph.add_connection("c", "d").unwrap();
        graph.add_connection("e", "f").unwrap();
        graph.add_connection("a", "b").unwrap();

        assert_eq!(graph.find_start().unwrap(), &"a");
        assert_eq!(graph.next(&"a"), Some(&"b"));
        assert_eq!(graph.next(&"b"), Some(&"c"));
        assert_eq!(graph.next(&"c"), Some(&"d"));
        assert_eq!(graph.next(&"d"), Some(&"e"));
        assert_eq!(graph.next(&"e"), Some(&"f"));
        assert_eq!(graph.next(&"f"), None);
        assert_eq!(graph.find_end().unwrap(), &"f");
    }

    #[test]
    fn test_len_counts_connections() {
        let mut graph = ConnectionGraph::new();
        assert!(graph.is_empty());

        graph.add_connection(1u32, 2).unwrap();
        graph.add_connection(2, 3).unwrap();
        assert_eq!(graph.len(), 2);
        assert!(!graph.is_empty());
    }
}
