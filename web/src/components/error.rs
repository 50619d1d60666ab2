use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

use crate::client::GEOLOCATION_UNSUPPORTED;

const PERMISSION_HINT: &str = "Allow location access in your browser to find the nearest responder.";
const UNSUPPORTED_HINT: &str = "Open this page in a browser with location support.";
const RETRY_HINT: &str = "Reload the page to try locating you again.";

/// Next step to suggest for a failed location lookup.
pub fn location_hint(message: &str) -> &'static str {
    let lowered = message.to_ascii_lowercase();
    if message == GEOLOCATION_UNSUPPORTED {
        UNSUPPORTED_HINT
    } else if lowered.contains("denied") || lowered.contains("permission") {
        PERMISSION_HINT
    } else {
        RETRY_HINT
    }
}

#[component]
pub fn ErrorView(message: String) -> impl IntoView {
    let hint = location_hint(&message);
    view! {
        <div class="location-error">
            <MessageBar intent=MessageBarIntent::Error>
                <strong>"Could not determine your location: "</strong>
                {message}
            </MessageBar>
            <p class="location-error-hint">{hint}</p>
        </div>
    }
}
