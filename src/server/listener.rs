use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info};

use crate::http::connection::Connection;
use crate::server::context::Context;

/// Accept loop: spawns one detached worker task per accepted connection and
/// never waits for a worker to finish. Accept failures are logged and the
/// loop keeps going.
pub async fn run(listener: TcpListener, ctx: Arc<Context>) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!(error = %e, "Unable to accept new connection");
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let ctx = Arc::clone(&ctx);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, ctx);
            if let Err(e) = conn.run().await {
                error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
