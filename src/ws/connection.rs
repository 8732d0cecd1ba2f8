//! Per-connection relay loop.
//!
//! Each upgraded socket gets its own task: it is admitted to the registry,
//! then forwards broadcast payloads from its relay channel to the socket
//! until either side goes away, and finally removes itself.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;

use crate::domain::SubscriberRegistry;

/// Runs the relay loop for a single WebSocket connection.
///
/// - Forwards every payload from the relay channel to the client.
/// - Watches the socket for close/error; inbound frames carry no protocol
///   and are otherwise ignored.
/// - Removes the connection from the registry on exit, whichever side
///   terminated first.
pub async fn run_connection(socket: WebSocket, registry: Arc<SubscriberRegistry>) {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let id = registry.admit(tx).await;
    tracing::info!(%id, "client connected");

    let (mut ws_tx, mut ws_rx) = socket.split();

    loop {
        tokio::select! {
            // Incoming frame from the client
            msg = ws_rx.next() => {
                match msg {
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    _ => {}
                }
            }
            // Broadcast payload from the relay channel
            payload = rx.recv() => {
                match payload {
                    Some(text) => {
                        if ws_tx.send(Message::Text(text)).await.is_err() {
                            break;
                        }
                    }
                    // Sender side gone: the registry pruned this connection.
                    None => break,
                }
            }
        }
    }

    registry.remove(id).await;
    tracing::info!(%id, "client disconnected");
}
