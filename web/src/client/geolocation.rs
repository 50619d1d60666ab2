use shared_types::Coordinate;

pub const GEOLOCATION_UNSUPPORTED: &str = "Geolocation not supported in this browser.";

/// Raises the unsupported alert and returns the matching error text.
pub fn report_unsupported<A>(alert: A) -> String
where
    A: FnOnce(&str),
{
    alert(GEOLOCATION_UNSUPPORTED);
    GEOLOCATION_UNSUPPORTED.to_string()
}

/// `navigator.geolocation` may be absent (`undefined`) rather than throwing,
/// so callers pass `None` for that case and get the alert here.
pub fn require_geolocation<T, A>(geolocation: Option<T>, alert: A) -> Result<T, String>
where
    A: FnOnce(&str),
{
    geolocation.ok_or_else(|| report_unsupported(alert))
}

/// Asks the browser for the user's position once. `on_result` receives the
/// coordinate or a human-readable error.
pub fn locate_user<F>(on_result: F)
where
    F: Fn(Result<Coordinate, String>) + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        use std::rc::Rc;
        use wasm_bindgen::{closure::Closure, JsCast, JsValue};
        use web_sys::{Position as GeolocationPosition, PositionError as GeolocationPositionError};

        let on_result = Rc::new(on_result);

        let Some(window) = web_sys::window() else {
            on_result(Err(GEOLOCATION_UNSUPPORTED.to_string()));
            return;
        };
        let alert = |message: &str| {
            let _ = window.alert_with_message(message);
        };

        let present = window.navigator().geolocation().ok().filter(|geolocation| {
            let value: &JsValue = geolocation.as_ref();
            !value.is_undefined() && !value.is_null()
        });
        let geolocation = match require_geolocation(present, alert) {
            Ok(geolocation) => geolocation,
            Err(message) => {
                on_result(Err(message));
                return;
            }
        };

        let on_success = {
            let on_result = Rc::clone(&on_result);
            Closure::<dyn FnMut(GeolocationPosition)>::new(move |position: GeolocationPosition| {
                let coords = position.coords();
                on_result(Ok(Coordinate::new(coords.latitude(), coords.longitude())));
            })
        };
        let on_error = {
            let on_result = Rc::clone(&on_result);
            Closure::<dyn FnMut(GeolocationPositionError)>::new(move |error: GeolocationPositionError| {
                on_result(Err(error.message()));
            })
        };

        if geolocation
            .get_current_position_with_error_callback(
                on_success.as_ref().unchecked_ref(),
                Some(on_error.as_ref().unchecked_ref()),
            )
            .is_err()
        {
            on_result(Err(report_unsupported(alert)));
        }

        on_success.forget();
        on_error.forget();
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_result;
    }
}
