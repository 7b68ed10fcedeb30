use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use std::io::Write;
use std::path::PathBuf;
use tabulor::config::{site_config_path, SiteConfig};
use tabulor::coordination::InMemoryCoordinationStore;
use tabulor::discovery::{DiscoveryOrchestrator, ScanOptions};

/// Lists every database instance registered in the coordination namespace,
/// with its identifier and the current holder of its leadership lock.
#[derive(Parser, Debug)]
#[command(name = "tabulor-instances")]
struct Cli {
    /// Display errors while listing instances
    #[arg(long)]
    print_errors: bool,

    /// Print information for all instances, not just those with names
    #[arg(long)]
    print_all: bool,

    /// Coordination store endpoints to contact (overrides the site config)
    #[arg(short = 'z', long = "coordination")]
    coordination: Option<String>,

    /// Path to the site configuration YAML
    #[arg(long)]
    site_config: Option<PathBuf>,

    /// Namespace snapshot to scan: a YAML mapping of absolute node path to
    /// text payload, as produced by a namespace export
    #[arg(long)]
    snapshot: PathBuf,

    /// env_logger-style filter string (e.g. "info,tabulor=debug"); overrides
    /// RUST_LOG/defaults
    #[arg(long)]
    log_filter: Option<String>,
}

const DEFAULT_LOG_FILTER: &str = "info,tabulor=info";

fn init_logging(cli_filter: Option<&str>) {
    let env = Env::default().default_filter_or(DEFAULT_LOG_FILTER);
    let mut builder = env_logger::Builder::from_env(env);
    if let Some(filter) = cli_filter {
        builder.parse_filters(filter);
    }
    builder.format_timestamp_secs();
    builder.format(|buf, record| {
        let ts = buf.timestamp();
        writeln!(
            buf,
            "[{} {:<5} {}] {}",
            ts,
            record.level(),
            record.target(),
            record.args()
        )
    });
    builder.init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_filter.as_deref());

    let config_path = site_config_path(cli.site_config.as_deref());
    let config = SiteConfig::load_or_default(&config_path)?;
    let endpoints = config.resolve_endpoints(cli.coordination.as_deref());

    let raw = std::fs::read_to_string(&cli.snapshot)
        .with_context(|| format!("unable to read snapshot {}", cli.snapshot.display()))?;
    let store = InMemoryCoordinationStore::from_yaml_snapshot(&raw)
        .with_context(|| format!("unable to parse snapshot {}", cli.snapshot.display()))?;

    let options = ScanOptions {
        show_error_detail: cli.print_errors,
        show_all_instances: cli.print_all,
    };
    let orchestrator = DiscoveryOrchestrator::new(&endpoints, &config.root, options);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    orchestrator.run(&store, &mut out)?;
    Ok(())
}
