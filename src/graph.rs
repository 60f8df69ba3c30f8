//! A module for working with route graphs.

use std::{
    borrow::Borrow,
    collections::{HashMap, HashSet},
    fmt::Debug,
    hash::Hash,
};

use tracing::debug;

use crate::{
    betweenness::compute_betweenness,
    edge::Edge,
    error::{Error, Result},
    metrics::{CentralityRanking, DegreeHistogram},
    routes::RouteMap,
    traversal::{self, Reachability},
};

/// An undirected, simple graph of the nonstop routes in a network.
///
/// The graph is built once from a [`RouteMap`] and is read-only afterwards.
#[derive(Clone, Debug)]
pub struct RouteGraph<T> {
    /// The airports in the order they were first discovered in the route map, each origin
    /// followed by its destinations. Rankings fall back on this order to break ties.
    nodes: Vec<T>,
    /// A mapping of airports to their position in `nodes`.
    index: HashMap<T, usize>,
    /// The routes in the graph.
    edges: HashSet<Edge<T>>,
    /// The neighbours of each node, indexed like `nodes`.
    adjacency: Vec<Vec<usize>>,
}

impl<T> Default for RouteGraph<T>
where
    Edge<T>: Eq + Hash,
    T: Clone + Eq + Hash + Ord + Debug,
{
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            edges: HashSet::new(),
            adjacency: Vec::new(),
        }
    }
}

impl<T> RouteGraph<T>
where
    Edge<T>: Eq + Hash,
    T: Clone + Eq + Hash + Ord + Debug,
{
    /// Builds the graph of a route map.
    ///
    /// Every origin and destination becomes a node, and every route an edge regardless of the
    /// direction it was listed in. Self-loops are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use airroutes::edge::Edge;
    /// use airroutes::graph::RouteGraph;
    /// use airroutes::routes::RouteMap;
    ///
    /// let routes: RouteMap<_> = [
    ///     ("DEN", vec!["ORD", "LAX"]),
    ///     ("ORD", vec!["DEN"]),
    ///     ("LAX", vec!["DEN"]),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let graph = RouteGraph::from_routes(&routes);
    ///
    /// assert_eq!(graph.vertex_count(), 3);
    /// assert_eq!(graph.edge_count(), 2);
    /// assert!(graph.contains(&Edge::new("LAX", "DEN")));
    /// ```
    pub fn from_routes(routes: &RouteMap<T>) -> Self {
        let mut graph = Self::default();

        for (origin, destinations) in routes.iter() {
            let o = graph.add_node(origin);

            for destination in destinations {
                let d = graph.add_node(destination);

                let Some(edge) = Edge::try_new(origin.clone(), destination.clone()) else {
                    continue;
                };

                // Only the first listing of a route extends the adjacency, the reverse listing
                // is the same undirected edge.
                if graph.edges.insert(edge) {
                    graph.adjacency[o].push(d);
                    graph.adjacency[d].push(o);
                }
            }
        }

        debug!(
            airports = graph.vertex_count(),
            routes = graph.edge_count(),
            "built route graph"
        );

        graph
    }

    /// Returns the airports in discovery order.
    pub fn nodes(&self) -> &[T] {
        &self.nodes
    }

    pub fn edges(&self) -> &HashSet<Edge<T>> {
        &self.edges
    }

    /// Returns the vertex count of the graph.
    pub fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the edge count of the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Checks if the graph contains an airport.
    pub fn contains_node<Q>(&self, airport: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(airport)
    }

    /// Checks if the graph contains a route.
    pub fn contains(&self, edge: &Edge<T>) -> bool {
        self.edges.contains(edge)
    }

    /// Returns the number of distinct neighbours of an airport.
    pub fn degree<Q>(&self, airport: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(airport).map(|&i| self.adjacency[i].len())
    }

    /// Returns the airports directly connected to `airport`, in the order the routes were listed.
    pub fn neighbours<Q>(&self, airport: &Q) -> Option<Vec<&T>>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .get(airport)
            .map(|&i| self.adjacency[i].iter().map(|&j| &self.nodes[j]).collect())
    }

    /// Computes the density of the graph, the ratio of edges with respect to the maximum possible
    /// edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use airroutes::graph::RouteGraph;
    /// use airroutes::routes::RouteMap;
    ///
    /// let routes: RouteMap<_> = [("DEN", vec!["ORD", "LAX"])].into_iter().collect();
    /// let graph = RouteGraph::from_routes(&routes);
    ///
    /// assert_eq!(graph.density(), 2.0 / 3.0);
    /// ```
    pub fn density(&self) -> f64 {
        let vc = self.vertex_count() as f64;
        let ec = self.edge_count() as f64;

        // Calculate the total number of possible edges given a vertex count.
        let pec = vc * (vc - 1.0) / 2.0;
        // Actual edges divided by the possible edges gives the density.
        ec / pec
    }

    /// Bins the airports by their degree.
    ///
    /// # Examples
    ///
    /// ```
    /// use airroutes::graph::RouteGraph;
    /// use airroutes::routes::RouteMap;
    ///
    /// let routes: RouteMap<_> = [("X", vec!["A", "B", "C"])].into_iter().collect();
    /// let graph = RouteGraph::from_routes(&routes);
    ///
    /// assert_eq!(graph.degree_histogram().counts(), &[0, 3, 0, 1]);
    /// ```
    pub fn degree_histogram(&self) -> DegreeHistogram {
        DegreeHistogram::from_degrees(self.adjacency.iter().map(Vec::len))
    }

    /// Returns `(degree, value)` pairs for every degree up to the highest, with values either as
    /// raw counts or as fractions of the airport count.
    pub fn degree_distribution(&self, normalize: bool) -> Vec<(usize, f64)> {
        self.degree_histogram().distribution(normalize)
    }

    /// Walks the graph breadth-first from `root`.
    ///
    /// Fails with [`Error::UnknownNode`] if the root isn't in the graph.
    pub fn reachability<Q>(&self, root: &Q) -> Result<Reachability<T>>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let i = self
            .index
            .get(root)
            .copied()
            .ok_or_else(|| Error::UnknownNode(format!("{root:?}")))?;

        let reachability = traversal::reachability(&self.nodes, i, &self.adjacency);

        debug!(
            root = ?reachability.root(),
            max_layer = reachability.max_layer(),
            reached = reachability.reached(),
            unreached = reachability.unreached(),
            "computed reachability"
        );

        Ok(reachability)
    }

    /// Returns the number of breadth-first rounds needed to reach every airport connected to
    /// `root`, counting the root itself as the first round.
    ///
    /// # Examples
    ///
    /// ```
    /// use airroutes::graph::RouteGraph;
    /// use airroutes::routes::RouteMap;
    ///
    /// let routes: RouteMap<_> = [("A", vec!["B"]), ("B", vec!["A", "C"]), ("C", vec!["B"])]
    ///     .into_iter()
    ///     .collect();
    /// let graph = RouteGraph::from_routes(&routes);
    ///
    /// assert_eq!(graph.rounds_to_reach_all("A").unwrap(), 3);
    /// assert_eq!(graph.rounds_to_reach_all("B").unwrap(), 2);
    /// assert!(graph.rounds_to_reach_all("Z").is_err());
    /// ```
    pub fn rounds_to_reach_all<Q>(&self, root: &Q) -> Result<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.reachability(root).map(|r| r.max_layer())
    }

    /// Returns a mapping of airports to their betweenness centrality: the fraction of shortest
    /// paths between every other pair of airports that pass through them.
    pub fn betweenness_centrality(&self, normalize: bool) -> HashMap<T, f64> {
        self.nodes
            .iter()
            .cloned()
            .zip(compute_betweenness(&self.adjacency, normalize))
            .collect()
    }

    /// Ranks the airports by betweenness centrality and keeps the `k` highest.
    ///
    /// Airports with equal scores keep their discovery order.
    ///
    /// # Examples
    ///
    /// ```
    /// use airroutes::graph::RouteGraph;
    /// use airroutes::routes::RouteMap;
    ///
    /// let routes: RouteMap<_> = [("A", vec!["B"]), ("B", vec!["C"]), ("C", vec!["D"])]
    ///     .into_iter()
    ///     .collect();
    /// let graph = RouteGraph::from_routes(&routes);
    ///
    /// let ranking = graph.betweenness_ranking(false, 3);
    /// assert_eq!(ranking.airports(), vec![&"B", &"C", &"A"]);
    /// assert_eq!(ranking.scores(), vec![2.0, 2.0, 0.0]);
    /// ```
    pub fn betweenness_ranking(&self, normalize: bool, k: usize) -> CentralityRanking<T> {
        let scores = compute_betweenness(&self.adjacency, normalize);
        let scores = self.nodes.iter().cloned().zip(scores).collect();

        CentralityRanking::from_scores(scores).top(k)
    }

    //
    // Private
    //

    /// Registers an airport if it's new and returns its index.
    fn add_node(&mut self, airport: &T) -> usize {
        if let Some(&i) = self.index.get(airport) {
            return i;
        }

        let i = self.nodes.len();
        self.nodes.push(airport.clone());
        self.index.insert(airport.clone(), i);
        self.adjacency.push(Vec::new());

        i
    }
}

impl<T> From<&RouteMap<T>> for RouteGraph<T>
where
    Edge<T>: Eq + Hash,
    T: Clone + Eq + Hash + Ord + Debug,
{
    fn from(routes: &RouteMap<T>) -> Self {
        Self::from_routes(routes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! graph {
        ($($origin:expr => [$($destination:expr),*]),* $(,)?) => {{
            let mut routes = RouteMap::new();

            $(
                routes.insert_routes($origin, [$($destination),*]);
            )*

            RouteGraph::from_routes(&routes)
        }}
    }

    #[test]
    fn default() {
        let graph: RouteGraph<&str> = RouteGraph::default();

        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn from_routes() {
        let graph = graph!("DEN" => ["ORD", "LAX"], "ORD" => ["DEN"], "LAX" => ["DEN"]);

        assert_eq!(graph.nodes(), &["DEN", "ORD", "LAX"]);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.contains(&Edge::new("DEN", "ORD")));
        assert!(graph.contains(&Edge::new("LAX", "DEN")));
        assert!(!graph.contains(&Edge::new("ORD", "LAX")));
    }

    #[test]
    fn from_routes_one_direction() {
        // Routes listed once still connect both airports.
        let graph = graph!("DEN" => ["ORD"]);

        assert_eq!(graph.neighbours("ORD"), Some(vec![&"DEN"]));
        assert_eq!(graph.degree("ORD"), Some(1));
    }

    #[test]
    fn from_routes_self_loop() {
        let graph = graph!("A" => ["A"]);

        assert_eq!(graph.nodes(), &["A"]);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.degree("A"), Some(0));
    }

    #[test]
    fn from_routes_is_idempotent() {
        let mut routes = RouteMap::new();
        routes.insert_routes("DEN", ["ORD", "LAX"]);
        routes.insert_routes("SFO", ["LAX", "DEN"]);

        let a = RouteGraph::from_routes(&routes);
        let b = RouteGraph::from(&routes);

        assert_eq!(a.nodes(), b.nodes());
        assert_eq!(a.edges(), b.edges());
    }

    #[test]
    fn contains_node() {
        let graph = graph!("DEN" => ["ORD"]);

        assert!(graph.contains_node("DEN"));
        assert!(graph.contains_node("ORD"));
        assert!(!graph.contains_node("LAX"));
    }

    #[test]
    fn degree() {
        let graph = graph!("DEN" => ["ORD", "LAX"], "ORD" => ["DEN", "LAX"]);

        assert_eq!(graph.degree("DEN"), Some(2));
        assert_eq!(graph.degree("ORD"), Some(2));
        assert_eq!(graph.degree("LAX"), Some(2));
        assert_eq!(graph.degree("SFO"), None);
    }

    #[test]
    fn density() {
        let graph: RouteGraph<&str> = RouteGraph::default();
        assert!(graph.density().is_nan());

        let graph = graph!("a" => ["b"]);
        assert_eq!(graph.density(), 1.0);

        let graph = graph!("a" => ["b", "c"]);
        assert_eq!(graph.density(), 2.0 / 3.0);
    }

    #[test]
    fn degree_histogram() {
        let graph: RouteGraph<&str> = RouteGraph::default();
        assert!(graph.degree_histogram().counts().is_empty());

        let graph = graph!("X" => ["A", "B", "C", "D", "E"]);
        let histogram = graph.degree_histogram();

        assert_eq!(histogram.counts(), &[0, 5, 0, 0, 0, 1]);
        assert_eq!(
            graph.degree_distribution(true),
            vec![
                (0, 0.0),
                (1, 5.0 / 6.0),
                (2, 0.0),
                (3, 0.0),
                (4, 0.0),
                (5, 1.0 / 6.0)
            ]
        );
    }

    #[test]
    fn reachability() {
        let graph = graph!("A" => ["B"], "B" => ["C"], "D" => ["E"]);

        let reachability = graph.reachability("A").unwrap();

        assert_eq!(reachability.root(), &"A");
        assert_eq!(reachability.max_layer(), 3);
        assert_eq!(reachability.layer_of(&"C"), Some(3));
        assert_eq!(reachability.unreached(), 2);
    }

    #[test]
    fn reachability_unknown_root() {
        let graph = graph!("A" => ["B"]);

        assert_eq!(
            graph.reachability("Z"),
            Err(Error::UnknownNode("\"Z\"".to_owned()))
        );
    }

    #[test]
    fn rounds_to_reach_all() {
        let graph = graph!("DEN" => ["ORD", "LAX"], "ORD" => ["DEN"], "LAX" => ["DEN"]);
        assert_eq!(graph.rounds_to_reach_all("DEN"), Ok(2));
        assert_eq!(graph.rounds_to_reach_all("ORD"), Ok(3));

        let graph = graph!("A" => ["A"]);
        assert_eq!(graph.rounds_to_reach_all("A"), Ok(1));
    }

    #[test]
    fn betweenness() {
        let (a, b, c, d) = ("a", "b", "c", "d");
        let graph = graph!(a => [b], b => [c], c => [d]);

        let betweenness_centrality = graph.betweenness_centrality(false);

        assert_eq!(betweenness_centrality.get_key_value(a), Some((&a, &0.0)));
        assert_eq!(betweenness_centrality.get_key_value(b), Some((&b, &2.0)));
        assert_eq!(betweenness_centrality.get_key_value(c), Some((&c, &2.0)));
        assert_eq!(betweenness_centrality.get_key_value(d), Some((&d, &0.0)));
    }

    #[test]
    fn betweenness_ranking() {
        let graph = graph!("A" => ["X"], "B" => ["X"], "X" => ["C", "D", "E"]);

        let ranking = graph.betweenness_ranking(false, 10);

        // The hub leads, the leaves follow in discovery order.
        assert_eq!(ranking.airports(), vec![&"X", &"A", &"B", &"C", &"D", &"E"]);
        assert_eq!(ranking.get(0), Some((&"X", 10.0)));
        assert!(ranking.scores()[1..].iter().all(|&s| s == 0.0));

        assert_eq!(graph.betweenness_ranking(false, 2).len(), 2);
    }

    #[test]
    fn betweenness_ranking_empty() {
        let graph: RouteGraph<&str> = RouteGraph::default();

        assert!(graph.betweenness_ranking(true, 20).is_empty());
    }
}
