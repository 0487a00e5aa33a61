use super::session::run_session;
use fatcat_dns_application::use_cases::HandleQueryUseCase;
use std::sync::Arc;
use tokio::io::BufReader;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

/// Accepts session connections until Ctrl-C. Every connection gets its own
/// task; all of them share the resolver and its cache.
pub async fn serve_tcp(addr: &str, use_case: Arc<HandleQueryUseCase>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(bind_address = %listener.local_addr()?, "Session server listening");

    loop {
        tokio::select! {
            accepted = listener.accept() => {
                let (stream, peer) = match accepted {
                    Ok(conn) => conn,
                    Err(e) => {
                        error!(error = %e, "Failed to accept session connection");
                        continue;
                    }
                };

                let use_case = use_case.clone();
                tokio::spawn(async move {
                    debug!(peer = %peer, "Session opened");
                    let (read_half, write_half) = stream.into_split();

                    match run_session(BufReader::new(read_half), write_half, &use_case).await {
                        Ok(()) => debug!(peer = %peer, "Session closed"),
                        Err(e) => debug!(peer = %peer, error = %e, "Session aborted"),
                    }
                });
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received");
                return Ok(());
            }
        }
    }
}
