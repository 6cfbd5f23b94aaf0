//! Tests for request decoding

use elserve::http::parser::{DecodeError, RECV_BUF_SIZE, decode};

#[test]
fn test_decode_simple_get_request() {
    let buf = b"GET /x HTTP/1.1\r\nHost: a\r\n";
    let req = decode(buf).unwrap();

    assert_eq!(req.method, "GET");
    assert_eq!(req.target, "/x");
    assert_eq!(req.version, "HTTP/1.1");
    assert_eq!(req.headers.get("Host"), Some("a"));
}

#[test]
fn test_decode_header_lookup_is_case_sensitive() {
    let buf = b"GET /x HTTP/1.1\r\nHost: a\r\n";
    let req = decode(buf).unwrap();

    assert_eq!(req.headers.get("host"), None);
}

#[test]
fn test_decode_multiple_headers() {
    let buf = b"GET /path HTTP/1.1\r\nHost: example.com\r\nUser-Agent: test-client\r\nAccept: */*\r\n";
    let req = decode(buf).unwrap();

    assert_eq!(req.headers.get("Host"), Some("example.com"));
    assert_eq!(req.headers.get("User-Agent"), Some("test-client"));
    assert_eq!(req.headers.get("Accept"), Some("*/*"));
}

#[test]
fn test_decode_duplicate_header_last_write_wins() {
    let buf = b"GET / HTTP/1.1\r\nX-Tag: first\r\nX-Tag: second\r\n";
    let req = decode(buf).unwrap();

    assert_eq!(req.headers.get("X-Tag"), Some("second"));
}

#[test]
fn test_decode_two_token_request_line_fails() {
    let buf = b"GET /\r\nHost: a\r\n";
    let result = decode(buf);

    assert!(matches!(result, Err(DecodeError::InvalidRequestLine)));
}

#[test]
fn test_decode_request_line_without_terminator_fails() {
    // Truncation can cut the request line before its terminator
    let buf = b"GET /some/long/target HT";
    let result = decode(buf);

    assert!(matches!(result, Err(DecodeError::InvalidRequestLine)));
}

#[test]
fn test_decode_stops_silently_at_malformed_header() {
    let buf = b"GET / HTTP/1.1\r\nBrokenHeader\r\nGood: value\r\n";
    let req = decode(buf).unwrap();

    // The malformed line ends header parsing; the well-formed line after
    // it is dropped, and no error is signaled.
    assert_eq!(req.headers.get("Good"), None);
    assert!(req.headers.is_empty());
}

#[test]
fn test_decode_keeps_headers_before_malformed_line() {
    let buf = b"GET / HTTP/1.1\r\nHost: a\r\nBrokenHeader\r\nGood: value\r\n";
    let req = decode(buf).unwrap();

    assert_eq!(req.headers.get("Host"), Some("a"));
    assert_eq!(req.headers.get("Good"), None);
    assert_eq!(req.headers.len(), 1);
}

#[test]
fn test_decode_ignores_body_bytes() {
    // No body framing: anything after the headers is ignored entirely
    let buf = b"POST /api HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello";
    let req = decode(buf).unwrap();

    assert_eq!(req.method, "POST");
    assert_eq!(req.headers.get("Content-Length"), Some("5"));
}

#[test]
fn test_decode_request_without_headers() {
    let buf = b"GET /x HTTP/1.1\r\n";
    let req = decode(buf).unwrap();

    assert!(req.headers.is_empty());
}

#[test]
fn test_decode_truncated_oversized_request() {
    // A request larger than the receive capacity is truncated before
    // decoding; the decoder must not panic on the cut-off remainder.
    let mut raw = Vec::from(&b"GET /big HTTP/1.1\r\n"[..]);
    let mut i = 0;
    while raw.len() < RECV_BUF_SIZE * 2 {
        raw.extend_from_slice(format!("X-Filler-{}: {}\r\n", i, "v".repeat(60)).as_bytes());
        i += 1;
    }

    let req = decode(&raw[..RECV_BUF_SIZE]).unwrap();

    assert_eq!(req.target, "/big");
    assert_eq!(req.headers.get("X-Filler-0"), Some("v".repeat(60).as_str()));
    // The last filler header never made it into the truncated buffer whole
    assert_eq!(req.headers.get(&format!("X-Filler-{}", i - 1)), None);
}

#[test]
fn test_decode_truncation_inside_request_line_fails() {
    let mut raw = Vec::from(&b"GET /"[..]);
    raw.extend(std::iter::repeat(b'a').take(RECV_BUF_SIZE * 2));
    raw.extend_from_slice(b" HTTP/1.1\r\n");

    let result = decode(&raw[..RECV_BUF_SIZE]);

    assert!(matches!(result, Err(DecodeError::InvalidRequestLine)));
}

#[test]
fn test_decode_invalid_utf8_request_line_fails() {
    let buf = b"GET /\xff\xfe HTTP/1.1\r\n";
    let result = decode(buf);

    assert!(matches!(result, Err(DecodeError::InvalidEncoding)));
}

#[test]
fn test_decode_any_method_token_is_accepted() {
    let buf = b"BREW /pot HTTP/1.1\r\n";
    let req = decode(buf).unwrap();

    assert_eq!(req.method, "BREW");
}
