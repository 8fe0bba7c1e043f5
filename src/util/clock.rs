//! Wall-clock access for message and order timestamps.

/// Current time in epoch milliseconds.
///
/// Returns `0.0` outside a browser, matching the placeholder timestamps used
/// during server rendering.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
