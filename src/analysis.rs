//! Entry points tying route maps, graph measurements and comparisons together.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    compare::Comparison,
    error::Result,
    graph::RouteGraph,
    metrics::CentralityRanking,
    routes::{AirportCode, RouteMap},
};

/// The hub reachability is measured from unless configured otherwise.
pub const DEFAULT_ROOT: &str = "DEN";

/// The number of ranked airports kept unless configured otherwise.
pub const DEFAULT_TOP_K: usize = 20;

/// Settings for analysing a network.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// The airport breadth-first rounds are counted from.
    pub root: AirportCode,
    /// The number of airports kept in the centrality ranking.
    pub top_k: usize,
    /// Report the degree distribution as fractions of the airport count.
    pub normalize_degrees: bool,
    /// Scale betweenness scores by the number of airport pairs.
    pub normalize_centrality: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            root: AirportCode(DEFAULT_ROOT.to_owned()),
            top_k: DEFAULT_TOP_K,
            normalize_degrees: false,
            normalize_centrality: true,
        }
    }
}

/// The measurements taken on one carrier's network.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NetworkReport {
    pub name: String,
    pub airports: usize,
    pub routes: usize,
    pub root: AirportCode,
    /// Breadth-first rounds needed to reach every airport connected to the root.
    pub rounds: usize,
    /// Airports not connected to the root at all.
    pub unreached: usize,
    pub degree_distribution: Vec<(usize, f64)>,
    pub centrality: CentralityRanking<AirportCode>,
}

/// Builds the graph of a carrier's routes and measures it.
///
/// Fails with [`Error::UnknownNode`](crate::error::Error::UnknownNode) if the configured root
/// isn't served by the network.
///
/// # Examples
///
/// ```
/// use airroutes::analysis::{analyze_network, AnalysisConfig};
/// use airroutes::routes::{AirportCode, RouteMap};
///
/// let code = |s: &str| s.parse::<AirportCode>();
///
/// let mut routes = RouteMap::new();
/// routes.insert_routes(code("DEN")?, [code("ORD")?, code("LAX")?]);
/// routes.insert_routes(code("ORD")?, [code("DEN")?]);
///
/// let report = analyze_network("United", &routes, &AnalysisConfig::default())?;
///
/// assert_eq!(report.airports, 3);
/// assert_eq!(report.rounds, 2);
/// assert_eq!(report.centrality.get(0).map(|(a, _)| a.as_str()), Some("DEN"));
/// # Ok::<(), airroutes::error::Error>(())
/// ```
pub fn analyze_network(
    name: &str,
    routes: &RouteMap<AirportCode>,
    config: &AnalysisConfig,
) -> Result<NetworkReport> {
    let graph = RouteGraph::from_routes(routes);
    info!(network = name, airports = graph.vertex_count(), "built network");

    let reachability = graph.reachability(&config.root)?;
    info!(
        network = name,
        root = %config.root,
        rounds = reachability.max_layer(),
        "measured reachability"
    );

    let degree_distribution = graph.degree_distribution(config.normalize_degrees);
    let centrality = graph.betweenness_ranking(config.normalize_centrality, config.top_k);

    Ok(NetworkReport {
        name: name.to_owned(),
        airports: graph.vertex_count(),
        routes: graph.edge_count(),
        root: config.root.clone(),
        rounds: reachability.max_layer(),
        unreached: reachability.unreached(),
        degree_distribution,
        centrality,
    })
}

/// Aligns the top `k` centrality rankings of two analysed networks.
///
/// Scores are compared as computed; no scaling for differences in network size is applied.
pub fn compare_networks(
    left: &NetworkReport,
    right: &NetworkReport,
    k: usize,
) -> Result<Comparison<AirportCode>> {
    let comparison = Comparison::new(
        &left.name,
        &left.centrality,
        &right.name,
        &right.centrality,
        k,
    )?;

    info!(
        left = %left.name,
        right = %right.name,
        ranks = comparison.len(),
        "compared networks"
    );

    Ok(comparison)
}
