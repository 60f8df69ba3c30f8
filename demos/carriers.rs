use airroutes::{
    analysis::{analyze_network, compare_networks, AnalysisConfig},
    error::Result,
    routes::{AirportCode, RouteMap},
};
use tracing_subscriber::EnvFilter;

const UNITED: &str = include_str!("../testdata/united.json");
const SOUTHWEST: &str = include_str!("../testdata/southwest.json");

fn load(json: &str) -> RouteMap<AirportCode> {
    serde_json::from_str(json).expect("sample route map is valid json")
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = AnalysisConfig {
        top_k: 15,
        ..AnalysisConfig::default()
    };

    let united = analyze_network("United", &load(UNITED), &config)?;
    let southwest = analyze_network("Southwest", &load(SOUTHWEST), &config)?;

    for report in [&southwest, &united] {
        println!(
            "\n{}: {} airports, {} routes, {} rounds from {}",
            report.name, report.airports, report.routes, report.rounds, report.root
        );
        println!("Degree distribution: {:?}", report.degree_distribution);
    }

    let comparison = compare_networks(&southwest, &united, config.top_k)?;

    println!(
        "\n{:>4}  {:<16}{:<16}",
        "rank",
        comparison.left_name(),
        comparison.right_name()
    );
    for row in comparison.rows() {
        println!(
            "{:>4}  {:<4}{:<12.4}{:<4}{:<12.4}",
            row.rank, row.left.0, row.left.1, row.right.0, row.right.1
        );
    }

    Ok(())
}
