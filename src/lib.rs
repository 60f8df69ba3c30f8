//! Airroutes is a small toolkit for analysing the topology of airline nonstop-route networks.
//!
//! # Basic usage
//!
//! The library is centered around the [`RouteGraph`](graph::RouteGraph) structure which is built
//! from a [`RouteMap`](routes::RouteMap), the mapping of each airport to the airports it serves
//! nonstop. Once built, reachability, degree and centrality measurements can be computed, and
//! the centrality rankings of two carriers compared rank by rank.
//!
//! ```rust
//! use airroutes::compare::Comparison;
//! use airroutes::graph::RouteGraph;
//! use airroutes::routes::RouteMap;
//!
//! // Routes only need to be listed in one direction.
//! let united: RouteMap<_> = [("DEN", vec!["ORD", "LAX", "SFO"]), ("ORD", vec!["EWR"])]
//!     .into_iter()
//!     .collect();
//! let southwest: RouteMap<_> = [("MDW", vec!["DEN", "BWI"]), ("BWI", vec!["LAS"])]
//!     .into_iter()
//!     .collect();
//!
//! let united = RouteGraph::from_routes(&united);
//! let southwest = RouteGraph::from_routes(&southwest);
//!
//! // Breadth-first rounds from the hub, the hub itself being the first.
//! assert_eq!(united.rounds_to_reach_all("DEN").unwrap(), 3);
//!
//! // Airports per degree, from 0 up to the highest degree.
//! assert_eq!(united.degree_histogram().counts(), &[0, 3, 1, 1]);
//!
//! // Line up the top betweenness rankings.
//! let comparison = Comparison::new(
//!     "United",
//!     &united.betweenness_ranking(true, 3),
//!     "Southwest",
//!     &southwest.betweenness_ranking(true, 3),
//!     3,
//! )
//! .unwrap();
//!
//! assert_eq!(comparison.rows()[0].left.0, "DEN");
//! assert_eq!(comparison.rows()[0].right.0, "MDW");
//! ```

pub mod analysis;
mod betweenness;
pub mod compare;
pub mod edge;
pub mod error;
pub mod graph;
pub mod metrics;
pub mod routes;
mod traversal;

pub use traversal::Reachability;
