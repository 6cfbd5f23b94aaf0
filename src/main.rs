mod config;
mod server;
mod http;

use std::sync::Arc;

use tokio::net::TcpListener;

use config::Config;
use http::media_type::MediaTypes;
use server::context::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;
    let ctx = Arc::new(Context::new(cfg, MediaTypes::new()));

    let addr = ctx.config.listen_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", addr);

    tokio::select! {
        res = server::listener::run(listener, ctx) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
