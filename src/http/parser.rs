use crate::http::request::{Headers, Request};

/// Capacity of the single receive call feeding the decoder. A request whose
/// encoded form exceeds this is truncated and decoded as-is.
pub const RECV_BUF_SIZE: usize = 8192;

#[derive(Debug)]
pub enum DecodeError {
    /// The first line did not split into method, target and version.
    InvalidRequestLine,
    /// A request-line token was not valid UTF-8.
    InvalidEncoding,
}

/// Decodes one receive buffer into a [`Request`].
///
/// Only the request line can fail decoding. Header parsing is lenient: it
/// stops silently at the first line that does not yield both a name and a
/// value, dropping that line and everything after it. No blank-line
/// terminator is sought and any body bytes in the buffer are ignored.
pub fn decode(buf: &[u8]) -> Result<Request, DecodeError> {
    let mut cursor = Cursor::new(buf);

    // Request line: exactly three space-delimited tokens, the version
    // token running to the line terminator.
    let line = cursor
        .take_until(b'\r')
        .ok_or(DecodeError::InvalidRequestLine)?;
    let mut tokens = line.splitn(3, |b| *b == b' ');
    let method = token_str(tokens.next())?;
    let target = token_str(tokens.next())?;
    let version = token_str(tokens.next())?;

    // Header lines: name up to the first ':', value up to the line
    // terminator. Each token carries one leading delimiter byte (the '\n'
    // of the preceding CRLF, the space after ':') which is stripped by
    // slicing one byte in.
    let mut headers = Headers::new();
    loop {
        let Some(line) = cursor.take_until(b'\r') else {
            break;
        };
        let line = strip_delim(line);
        let Some(colon) = line.iter().position(|b| *b == b':') else {
            break;
        };
        let Ok(name) = std::str::from_utf8(&line[..colon]) else {
            break;
        };
        let Ok(value) = std::str::from_utf8(strip_delim(&line[colon + 1..])) else {
            break;
        };
        headers.insert(name, value);
    }

    Ok(Request {
        method,
        target,
        version,
        headers,
    })
}

/// Byte cursor over the receive buffer.
struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Returns the bytes up to the next `delim` and advances past it, or
    /// `None` when the delimiter does not occur before the end of the
    /// buffer (the cursor is left where it was).
    fn take_until(&mut self, delim: u8) -> Option<&'a [u8]> {
        let rest = &self.buf[self.pos..];
        let idx = rest.iter().position(|b| *b == delim)?;
        self.pos += idx + 1;
        Some(&rest[..idx])
    }
}

fn strip_delim(token: &[u8]) -> &[u8] {
    token.get(1..).unwrap_or_default()
}

fn token_str(token: Option<&[u8]>) -> Result<String, DecodeError> {
    let token = token.ok_or(DecodeError::InvalidRequestLine)?;
    let token = std::str::from_utf8(token).map_err(|_| DecodeError::InvalidEncoding)?;
    Ok(token.to_string())
}
