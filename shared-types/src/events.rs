//! Frames exchanged over the realtime channel. Each one is a JSON text frame
//! carrying an `event` name and, for server pushes, a `data` payload.

use serde::{Deserialize, Serialize};

use crate::Responder;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerEvent {
    AvailableResponders(Vec<Responder>),
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum ClientEvent {
    GetResponders,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn available_responders_frame_shape() {
        let event = ServerEvent::AvailableResponders(vec![Responder::new("Responder 3", 13.0827, 80.2707, true)]);

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            value,
            json!({
                "event": "available-responders",
                "data": [
                    {"name": "Responder 3", "lat": 13.0827, "lon": 80.2707, "available": true}
                ]
            })
        );
    }

    #[test]
    fn get_responders_needs_no_payload() {
        let event: ClientEvent = serde_json::from_str(r#"{"event":"get-responders"}"#).unwrap();
        assert_eq!(event, ClientEvent::GetResponders);
    }

    #[test]
    fn unknown_client_event_is_rejected() {
        assert!(serde_json::from_str::<ClientEvent>(r#"{"event":"subscribe"}"#).is_err());
    }
}
