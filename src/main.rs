use anyhow::Result;
use clap::Parser;
use queueboard::config::Args;
use queueboard::error::ServerError;
use queueboard::joint::axum::{AxumWSJoint, WS_PATH};
use queueboard::utils::logging::init_logging;
use queueboard::utils::net::get_local_ip;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging("queueboard", args.verbose)?;

    let bind_addr = args.bind_addr();
    let listener = TcpListener::bind(bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: bind_addr.to_string(),
            source,
        })?;

    if !args.static_dir.join("index.html").exists() {
        tracing::warn!(
            "no index.html in {}, only the websocket endpoint is useful",
            args.static_dir.display()
        );
    }

    let local_ip = get_local_ip().map_or_else(|| bind_addr.ip().to_string(), |ip| ip.to_string());
    tracing::info!(
        "Server running at: http://{}:{} (websocket on {})",
        local_ip,
        bind_addr.port(),
        WS_PATH
    );

    let joint = AxumWSJoint::new(args.admin_secret());
    joint.serve(listener, &args.static_dir).await?;
    Ok(())
}
