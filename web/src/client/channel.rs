use shared_types::Responder;

pub const CHANNEL_PATH: &str = "/ws";

/// Builds the realtime channel URL for the page's own host.
pub fn channel_url(protocol: &str, host: &str) -> String {
    let scheme = if protocol == "https:" { "wss" } else { "ws" };
    format!("{}://{}{}", scheme, host, CHANNEL_PATH)
}

/// Opens the realtime channel and asks for the responder list.
///
/// Only the first snapshot is handed to `on_list`; the list does not change
/// for the lifetime of the connection.
pub fn request_responders<F>(on_list: F)
where
    F: Fn(Vec<Responder>) + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        use leptos::logging::log;
        use shared_types::{ClientEvent, ServerEvent};
        use std::cell::Cell;
        use wasm_bindgen::{closure::Closure, JsCast};
        use web_sys::{MessageEvent, WebSocket};

        let Some(location) = web_sys::window().map(|window| window.location()) else {
            log!("No window available for the realtime channel");
            return;
        };
        let (Ok(protocol), Ok(host)) = (location.protocol(), location.host()) else {
            log!("Could not read page location for the realtime channel");
            return;
        };

        let socket = match WebSocket::new(&channel_url(&protocol, &host)) {
            Ok(socket) => socket,
            Err(err) => {
                log!("Failed to open realtime channel: {:?}", err);
                return;
            }
        };

        let delivered = Cell::new(false);
        let on_message = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
            let Some(text) = event.data().as_string() else {
                return;
            };
            match serde_json::from_str::<ServerEvent>(&text) {
                Ok(ServerEvent::AvailableResponders(responders)) => {
                    log!("Responders received: {}", responders.len());
                    if !delivered.replace(true) {
                        on_list(responders);
                    }
                }
                Err(err) => log!("Ignoring realtime event: {}", err),
            }
        });
        socket.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
        on_message.forget();

        let request = match serde_json::to_string(&ClientEvent::GetResponders) {
            Ok(request) => request,
            Err(err) => {
                log!("Failed to encode responder request: {}", err);
                return;
            }
        };
        let opened = socket.clone();
        let on_open = Closure::<dyn FnMut()>::new(move || {
            if let Err(err) = opened.send_with_str(&request) {
                log!("Failed to request responders: {:?}", err);
            }
        });
        socket.set_onopen(Some(on_open.as_ref().unchecked_ref()));
        on_open.forget();
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_list;
    }
}
