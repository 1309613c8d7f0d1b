//! SVGL MCP server: stdio transport.
//!
//! Reads line-delimited JSON-RPC 2.0 from stdin and writes responses to
//! stdout, one per line. Logs go to stderr so they never mix with the
//! protocol stream. Exits cleanly on SIGINT or stdin EOF.

mod protocol;
mod server;

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdout};
use tracing::{info, warn};

use svgl_tools::{default_registry, SvglClient};

use server::SvglMcpServer;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let client = Arc::new(SvglClient::new());
    let registry = Arc::new(default_registry(client));
    let server = SvglMcpServer::new(registry);

    info!("SVGL MCP server running on stdio");

    let stdin = tokio::io::stdin();
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(stdin).lines();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupt received, shutting down");
                break;
            }
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => break,
                    Err(error) => {
                        warn!("Failed to read stdin: {}", error);
                        break;
                    }
                };

                if line.trim().is_empty() {
                    continue;
                }

                if let Some(response) = server.handle_line(&line).await {
                    if let Err(error) = write_line(&mut stdout, &response).await {
                        warn!("Failed to write response: {}", error);
                        break;
                    }
                }
            }
        }
    }
}

async fn write_line(stdout: &mut Stdout, response: &str) -> std::io::Result<()> {
    stdout.write_all(response.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await
}
