//! WebSocket layer: subscriber admission and the per-connection relay loop.
//!
//! The WebSocket endpoint at `/ws` is receive-only from the client's point
//! of view: no handshake payload is required or interpreted, and every
//! broadcast weather event arrives as raw JSON text.

pub mod connection;
pub mod handler;
