use std::sync::Arc;

use anyhow::Context as _;
use bytes::BytesMut;
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};

use crate::http::parser::{self, RECV_BUF_SIZE};
use crate::http::request::Request;
use crate::http::response::{Body, ResponseBuilder};
use crate::http::writer::ResponseWriter;
use crate::server::context::Context;

/// Server identification header value sent with every response.
const SERVER_NAME: &str = concat!("elserve/", env!("CARGO_PKG_VERSION"));

/// Per-connection worker: services exactly one request/response cycle and
/// then closes the connection.
pub struct Connection<S> {
    stream: S,
    ctx: Arc<Context>,
    state: ConnectionState,
}

/// States of the worker. Each state that fails falls through to `Closed`;
/// dropping the state releases exactly the components that the path
/// actually constructed.
pub enum ConnectionState {
    /// Wait for the single bounded receive.
    Receive,
    /// Decode the received bytes into a request.
    Decode(BytesMut),
    /// Resolve the target to a file under the document root.
    Resolve(Request),
    /// Send the header block, then stream the file as the body.
    Respond(Request, File),
    /// Terminal: every resource released, connection about to close.
    Closed,
}

impl<S: AsyncRead + AsyncWrite + Unpin> Connection<S> {
    pub fn new(stream: S, ctx: Arc<Context>) -> Self {
        Self {
            stream,
            ctx,
            state: ConnectionState::Receive,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let state = std::mem::replace(&mut self.state, ConnectionState::Closed);
            match state {
                ConnectionState::Receive => {
                    let buf = self.receive().await?;
                    if buf.is_empty() {
                        // Peer closed without sending anything
                        self.state = ConnectionState::Closed;
                    } else {
                        self.state = ConnectionState::Decode(buf);
                    }
                }

                ConnectionState::Decode(buf) => match parser::decode(&buf) {
                    Ok(req) => {
                        self.state = ConnectionState::Resolve(req);
                    }
                    Err(e) => {
                        // The peer observes a bare close, never an error status
                        tracing::debug!(error = ?e, "Dropping undecodable request");
                        self.state = ConnectionState::Closed;
                    }
                },

                ConnectionState::Resolve(mut req) => {
                    if req.target == "/" {
                        req.target = self.ctx.config.site.default_page.clone();
                    }
                    tracing::info!("> ({}) ({}) ({})", req.method, req.target, req.version);

                    // The target is joined to the document root verbatim;
                    // no normalization or containment check happens here.
                    let path = format!("{}{}", self.ctx.config.site.root_dir, req.target);
                    match File::open(&path).await {
                        Ok(file) => {
                            self.state = ConnectionState::Respond(req, file);
                        }
                        Err(e) => {
                            tracing::debug!(path = %path, error = %e, "Unable to open target resource");
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Respond(req, file) => {
                    let mut response = ResponseBuilder::new("200 OK")
                        .header("content-type", self.ctx.media_types.lookup(&req.target))
                        .header("server", SERVER_NAME)
                        .body(Body::File(file))
                        .build();

                    let mut writer = ResponseWriter::new(&mut self.stream);
                    writer.send_header_block(&response).await?;

                    match response.take_body() {
                        Body::File(mut file) => {
                            if let Err(e) = writer.send_file(&mut file).await {
                                tracing::error!("Error sending body for {}: {:#}", req.target, e);
                            }
                        }
                        Body::Bytes(bytes) => {
                            writer.send_body(&bytes).await?;
                        }
                        Body::Empty => {}
                    }

                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => break,
            }
        }

        Ok(())
    }

    /// One bounded receive: at most [`RECV_BUF_SIZE`] bytes in a single
    /// read. Whatever the peer sends beyond that is never read, so the
    /// decoder sees a truncated buffer.
    async fn receive(&mut self) -> anyhow::Result<BytesMut> {
        let mut buf = BytesMut::with_capacity(RECV_BUF_SIZE);
        self.stream
            .read_buf(&mut buf)
            .await
            .context("Unable to receive request")?;
        Ok(buf)
    }
}
