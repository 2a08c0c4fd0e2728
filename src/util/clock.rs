//! Wall-clock capability for cache freshness decisions.

/// Source of "now" in milliseconds since the Unix epoch.
///
/// Injected into `AuthSession` so freshness-window tests can advance time
/// deterministically instead of sleeping.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Clock backed by the browser's `Date.now()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> f64 {
        #[cfg(feature = "hydrate")]
        {
            js_sys::Date::now()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            0.0
        }
    }
}
