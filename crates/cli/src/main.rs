use clap::Parser;
use fatcat_dns_domain::CliOverrides;
use std::net::Ipv4Addr;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser, Debug)]
#[command(name = "fatcat-dns")]
#[command(version)]
#[command(about = "Fatcat DNS - minimal caching resolver with an interactive query session")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Serve sessions over TCP on this address instead of stdin/stdout
    #[arg(short = 'l', long, value_name = "ADDR")]
    listen: Option<String>,

    /// Default upstream resolver
    #[arg(short = 'r', long)]
    resolver: Option<Ipv4Addr>,

    /// Upstream resolver service port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Response timeout in seconds
    #[arg(short = 't', long)]
    timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            listen: self.listen.clone(),
            default_resolver: self.resolver,
            service_port: self.port,
            response_timeout_secs: self.timeout,
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;

    // Logs go to stderr; stdout may be the session channel
    bootstrap::init_logging(&config);

    info!("Starting Fatcat DNS v{}", env!("CARGO_PKG_VERSION"));

    let services = di::DnsServices::new(&config)?;

    match config.server.listen.as_deref() {
        Some(addr) => server::serve_tcp(addr, services.handle_query.clone()).await?,
        None => server::serve_stdio(services.handle_query.clone()).await?,
    }

    let metrics = services.cache.metrics();
    info!(
        hits = metrics.hits,
        misses = metrics.misses,
        insertions = metrics.insertions,
        swept = metrics.swept,
        "Shutdown complete"
    );
    Ok(())
}
