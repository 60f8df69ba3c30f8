//! A module for working with nonstop routes as undirected edges.

use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

use serde::Serialize;

/// A nonstop route between two airports. Routes are undirected: `DEN-ORD` and `ORD-DEN` denote
/// the same edge, the `source`-`target` naming only reflects the order of construction.
#[derive(Clone, Debug, Eq, Serialize)]
pub struct Edge<T> {
    source: T,
    target: T,
}

impl<T> Edge<T> {
    /// Creates a new edge between two airports.
    ///
    /// # Examples
    ///
    /// ```
    /// use airroutes::edge::Edge;
    ///
    /// let edge = Edge::new("DEN", "ORD");
    /// assert_eq!(edge, Edge::new("ORD", "DEN"));
    /// ```
    pub fn new(source: T, target: T) -> Self {
        Self { source, target }
    }

    /// Creates a new edge, returning `None` if both endpoints are the same airport.
    ///
    /// # Examples
    ///
    /// ```
    /// use airroutes::edge::Edge;
    ///
    /// assert!(Edge::try_new("DEN", "ORD").is_some());
    /// assert!(Edge::try_new("DEN", "DEN").is_none());
    /// ```
    pub fn try_new(source: T, target: T) -> Option<Self>
    where
        T: PartialEq,
    {
        if source == target {
            return None;
        }

        Some(Self::new(source, target))
    }

    /// Returns the airport the edge was constructed from.
    pub fn source(&self) -> &T {
        &self.source
    }

    /// Returns the airport the edge was constructed to.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Returns whether the edge touches the given airport.
    pub fn contains(&self, vertex: &T) -> bool
    where
        T: PartialEq,
    {
        self.source() == vertex || self.target() == vertex
    }

    /// Returns the endpoint opposite to `vertex`, or `None` if the edge doesn't touch it.
    ///
    /// # Examples
    ///
    /// ```
    /// use airroutes::edge::Edge;
    ///
    /// let edge = Edge::new("DEN", "ORD");
    ///
    /// assert_eq!(edge.other(&"DEN"), Some(&"ORD"));
    /// assert_eq!(edge.other(&"LAX"), None);
    /// ```
    pub fn other(&self, vertex: &T) -> Option<&T>
    where
        T: PartialEq,
    {
        if self.source() == vertex {
            Some(self.target())
        } else if self.target() == vertex {
            Some(self.source())
        } else {
            None
        }
    }

    /// Returns both endpoints, lowest first.
    pub fn sorted(&self) -> (&T, &T)
    where
        T: Ord,
    {
        match self.source.cmp(&self.target) {
            Ordering::Greater => (&self.target, &self.source),
            _ => (&self.source, &self.target),
        }
    }
}

//
// Trait implementations
//

impl<T: PartialEq> PartialEq for Edge<T> {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = (&self.source, &self.target);
        let (c, d) = (&other.source, &other.target);

        a == d && b == c || a == c && b == d
    }
}

impl<T: Hash + Ord> Hash for Edge<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hashing the sorted pair makes (a, b) and (b, a) collide, as `Eq` requires.
        let (low, high) = self.sorted();
        low.hash(state);
        high.hash(state);
    }
}
