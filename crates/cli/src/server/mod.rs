mod session;
mod tcp;

pub use tcp::serve_tcp;

use session::run_session;

use fatcat_dns_application::use_cases::HandleQueryUseCase;
use std::sync::Arc;
use tokio::io::BufReader;

/// Single session over stdin/stdout.
pub async fn serve_stdio(use_case: Arc<HandleQueryUseCase>) -> anyhow::Result<()> {
    let reader = BufReader::new(tokio::io::stdin());
    run_session(reader, tokio::io::stdout(), &use_case).await?;
    Ok(())
}
