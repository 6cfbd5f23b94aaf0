//! HTTP protocol implementation.
//!
//! This module implements the request/response protocol for a minimal
//! static-file server: one request decoded per connection, one response
//! transmitted, connection closed.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The per-connection worker implementing the request-response state machine
//! - **`parser`**: Decodes one receive buffer into a request
//! - **`request`**: HTTP request representation and the per-request header store
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`media_type`**: Content-type detection based on target suffixes
//!
//! # Connection State Machine
//!
//! Each accepted connection goes through a state machine, and any state
//! whose step fails falls directly through to cleanup:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Receive   │ ← One bounded read of the request bytes
//!        └──────┬──────┘
//!               │ Bytes received
//!               ▼
//!        ┌──────────────────┐
//!        │     Decode       │ ← Parse request line and headers
//!        └──────┬───────────┘
//!               │ Request decoded
//!               ▼
//!        ┌──────────────────┐
//!        │     Resolve      │ ← Map the target to a file under the root
//!        └──────┬───────────┘
//!               │ File opened
//!               ▼
//!        ┌──────────────────┐
//!        │     Respond      │ ← Header block, then streamed body
//!        └──────┬───────────┘
//!               │ Response sent (or any step failed)
//!               ▼
//!        ┌──────────────────┐
//!        │     Closed       │ ← Everything released, connection closed
//!        └──────────────────┘
//! ```
//!
//! Failures never surface to the peer as an error status: the connection
//! is simply closed.

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
pub mod media_type;
