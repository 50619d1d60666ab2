use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use shared_types::{ClientEvent, ServerEvent};

use crate::{registry::ResponderRegistry, state::ApiState};

pub async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<ApiState>) -> Response {
    let registry = state.registry.clone();
    ws.on_upgrade(move |socket| serve_connection(socket, registry))
}

/// Pushes the registry once on connect, then again whenever the client asks.
async fn serve_connection(mut socket: WebSocket, registry: ResponderRegistry) {
    tracing::info!("A user connected");

    if push_responders(&mut socket, &registry).await.is_ok() {
        while let Some(Ok(message)) = socket.recv().await {
            match message {
                Message::Text(text) => match serde_json::from_str::<ClientEvent>(&text) {
                    Ok(ClientEvent::GetResponders) => {
                        if push_responders(&mut socket, &registry).await.is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Ignoring malformed realtime message: {}. Body: {}", e, text);
                    }
                },
                Message::Close(_) => break,
                // ping/pong are answered by axum; binary frames carry nothing for us
                _ => {}
            }
        }
    }

    tracing::info!("A user disconnected");
}

async fn push_responders(socket: &mut WebSocket, registry: &ResponderRegistry) -> Result<(), axum::Error> {
    let event = ServerEvent::AvailableResponders(registry.snapshot());
    let payload = match serde_json::to_string(&event) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::error!("Failed to encode responder list: {}", e);
            return Ok(());
        }
    };

    tracing::debug!("Pushing {} responders", registry.len());
    socket.send(Message::Text(payload)).await
}
