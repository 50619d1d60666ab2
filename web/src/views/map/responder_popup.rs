use leptos::prelude::*;
use thaw::{Label, LabelSize};

pub const ETA_PENDING: &str = "calculating...";

pub fn distance_line(distance_km: f64) -> String {
    format!("Distance: {:.2} km", distance_km)
}

/// `None` while the travel-time lookup is still in flight.
pub fn eta_line(eta: Option<&str>) -> String {
    format!("ETA: {}", eta.unwrap_or(ETA_PENDING))
}

#[component]
pub fn ResponderPopup(name: String, distance_km: f64, eta: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <div style="margin: 0.5rem 0; display: flex; flex-direction: column; gap: 0.25rem;">
            <Label size=LabelSize::Large>{name}</Label>
            <p style="margin: 0; color: #6b7280; font-size: 0.875rem;">
                {distance_line(distance_km)}
            </p>
            <p style="margin: 0; color: #6b7280; font-size: 0.875rem;">
                {move || eta.with(|eta| eta_line(eta.as_deref()))}
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_has_two_decimals() {
        assert_eq!(distance_line(3.958_5), "Distance: 3.96 km");
        assert_eq!(distance_line(0.0), "Distance: 0.00 km");
    }

    #[test]
    fn eta_shows_placeholder_until_resolved() {
        assert_eq!(eta_line(None), "ETA: calculating...");
        assert_eq!(eta_line(Some("9 min")), "ETA: 9 min");
        assert_eq!(eta_line(Some("N/A")), "ETA: N/A");
    }
}
