//! Blocking probability of an RWA strategy over a reference backbone under
//! dynamic traffic.
//!
//! For every offered load the simulator routes a fixed number of Poisson
//! arrivals and reports the percentage that found no free wavelength. The
//! genetic search runs by default, the shortest path baselines are there to
//! compare it against.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rwa_ga::config::Config;
use rwa_ga::optical_network::TopologyKind;
use rwa_ga::routing::RwaStrategy;
use rwa_ga::simulation::{SimulationReport, Simulator};

/// RWA simulator for WDM networks
#[derive(Parser)]
#[command(name = "sim_rwa")]
#[command(about = "Blocking probability of RWA strategies over WDM backbones", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON configuration file, defaults apply to every missing field
    #[arg(short, long, env = "SIM_RWA_CONFIG")]
    config: Option<PathBuf>,

    /// Random seed, overrides `ga.seed` from the configuration
    #[arg(short, long, env = "SIM_RWA_SEED")]
    seed: Option<u64>,

    /// Network topology, overrides `network.topology`
    #[arg(short, long, value_enum)]
    topology: Option<TopologyKind>,

    /// RWA strategy, overrides `rwa.strategy`
    #[arg(short = 'r', long, value_enum)]
    strategy: Option<RwaStrategy>,

    /// Alternate routes for yen-first-fit, overrides `rwa.k_paths`
    #[arg(short = 'y', long)]
    k_paths: Option<usize>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "SIM_RWA_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Also write the per load mean blocking probabilities to this file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| cli.log_level.clone().into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => Config::default(),
    };
    if cli.seed.is_some() {
        config.ga.seed = cli.seed;
    }
    if let Some(topology) = cli.topology {
        config.network.topology = topology;
    }
    if let Some(strategy) = cli.strategy {
        config.rwa.strategy = strategy;
    }
    if let Some(k_paths) = cli.k_paths {
        config.rwa.k_paths = k_paths;
    }

    let topology = config.network.build_topology()
        .with_context(|| format!("building the {} topology", config.network.topology))?;
    let mut rng = match config.ga.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    info!(?config, "starting simulation");

    let simulator = Simulator::new(config)?;
    let report = simulator.run(&topology, &mut rng)?;

    print_table(&report);
    if let Some(path) = &cli.output {
        write_blocking(&report, path)
            .with_context(|| format!("writing blocking probabilities to {}", path.display()))?;
    }
    Ok(())
}

fn print_table(report:&SimulationReport) {
    println!("{:>6}  {:>12}  {:>10}", "load", "blocking %", "std dev");
    for summary in report.summary() {
        let std_dev = summary.std_dev.map_or_else(|| "-".to_string(), |s| format!("{s:.4}"));
        println!("{:>6}  {:>12.4}  {:>10}", summary.load, summary.mean, std_dev);
    }
}

// one line, comma separated, loads ascending
fn write_blocking(report:&SimulationReport,path:&PathBuf) -> anyhow::Result<()> {
    let mut file = std::fs::File::create(path)?;
    let line:Vec<String> = report.summary().iter().map(|s| format!("{:.4}", s.mean)).collect();
    writeln!(file, "{}", line.join(", "))?;
    Ok(())
}
