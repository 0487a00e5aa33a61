use fatcat_dns_application::use_cases::session::{BANNER, FAREWELL, PROMPT};
use fatcat_dns_application::use_cases::{HandleQueryUseCase, SessionCommand};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

/// Runs one interactive session until a blank line or end of input.
///
/// Each request is answered before the next line is read.
pub async fn run_session<R, W>(
    mut reader: R,
    mut writer: W,
    use_case: &HandleQueryUseCase,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(BANNER.as_bytes()).await?;
    writer.write_all(b"\n").await?;

    let mut line = String::new();
    loop {
        writer.write_all(PROMPT.as_bytes()).await?;
        writer.flush().await?;

        line.clear();
        let command = match reader.read_line(&mut line).await? {
            0 => Ok(SessionCommand::End),
            _ => SessionCommand::parse(&line),
        };

        let reply = match command {
            Ok(SessionCommand::Resolve(query)) => use_case.execute(&query).await.to_string(),
            Ok(SessionCommand::End) => break,
            Err(e) => {
                debug!(input = line.trim(), error = %e, "Rejected session input");
                e.to_string()
            }
        };

        writer.write_all(reply.as_bytes()).await?;
        writer.write_all(b"\n").await?;
    }

    writer.write_all(FAREWELL.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await
}
