use anyhow::Context as _;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Chunk size for streaming file bodies.
const BUFFER_SIZE: usize = 8192;

fn serialize_header_block(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::new();

    // Status line
    let status_line = format!("{} {}\r\n", HTTP_VERSION, resp.status());
    buf.extend_from_slice(status_line.as_bytes());

    // Headers, in insertion order
    for (name, value) in resp.headers() {
        buf.extend_from_slice(name.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(value.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    buf
}

/// Writes a response to a connection: the header block first, then the
/// body, either from memory or streamed from an open file.
///
/// Generic over the stream so the same code drives TCP sockets and
/// in-memory test streams.
pub struct ResponseWriter<'a, W> {
    stream: &'a mut W,
}

impl<'a, W: AsyncWrite + Unpin> ResponseWriter<'a, W> {
    pub fn new(stream: &'a mut W) -> Self {
        Self { stream }
    }

    /// Writes the status line, each `Name: Value` header line in insertion
    /// order, and the terminating blank line. A partial write or connection
    /// error is reported as a transmission failure, not retried.
    pub async fn send_header_block(&mut self, response: &Response) -> anyhow::Result<()> {
        let block = serialize_header_block(response);
        self.stream
            .write_all(&block)
            .await
            .context("Unable to send header block")?;
        Ok(())
    }

    /// Writes an in-memory body after the header block.
    pub async fn send_body(&mut self, bytes: &[u8]) -> anyhow::Result<()> {
        self.stream
            .write_all(bytes)
            .await
            .context("Unable to send body")?;
        Ok(())
    }

    /// Streams `file` in bounded chunks until end-of-file. The first read
    /// or write error aborts the transmission; the underlying error stays
    /// attached for diagnostics.
    pub async fn send_file(&mut self, file: &mut File) -> anyhow::Result<()> {
        let mut chunk = [0u8; BUFFER_SIZE];

        loop {
            let n = file
                .read(&mut chunk)
                .await
                .context("Unable to read resource")?;
            if n == 0 {
                return Ok(());
            }

            self.stream
                .write_all(&chunk[..n])
                .await
                .context("Unable to send body chunk")?;
        }
    }
}
