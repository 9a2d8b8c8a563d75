use clap::Parser;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

use cbn_chainparams::{ChainParamsRegistry, Network};

#[derive(Parser)]
#[command(name = "cbn-params")]
#[command(about = "Builds and validates the CBN chain parameter tables, selects a network and prints its bundle.", long_about = None)]
struct Args {
    /// Use the specified network (main, test, regtest, unittest).
    #[arg(short, long, default_value = "main")]
    pub network: Network,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Disable colored output.
    #[arg(long, default_value = "false")]
    pub no_color: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    init_tracing(&args)?;

    let mut registry = ChainParamsRegistry::new()?;
    registry.select(args.network);

    let params = registry.current();
    info!(network = %params.network, port = params.default_port, magic = %params.magic, "active bundle");
    info!(
        genesis = %params.genesis_hash,
        merkle_root = %params.genesis.header.merkle_root,
        time = params.genesis.header.time,
        "genesis validated"
    );
    info!(
        dns_seeds = params.dns_seeds.len(),
        fixed_seeds = params.fixed_seeds.len(),
        checkpoints = params.checkpoints.checkpoints.len(),
        "peer discovery tables"
    );
    for seed in &params.dns_seeds {
        info!(host = seed.host, "dns seed");
    }

    Ok(())
}

fn init_tracing(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let level = match args.log_level.as_str() {
        "error" => tracing::Level::ERROR,
        "warn" => tracing::Level::WARN,
        "info" => tracing::Level::INFO,
        "debug" => tracing::Level::DEBUG,
        "trace" => tracing::Level::TRACE,
        _ => {
            eprintln!(
                "Invalid log level: {}. Using 'info' as default.",
                args.log_level
            );
            tracing::Level::INFO
        }
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let use_ansi = std::io::IsTerminal::is_terminal(&std::io::stderr()) && !args.no_color;

    let subscriber = Registry::default().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_level(true)
            .with_target(true)
            .with_ansi(use_ansi),
    );

    subscriber.try_init()?;

    Ok(())
}
