//! Full-page navigation capability.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login happens by leaving the single-page app for the backend's OAuth
//! endpoint, which is a `window.location` assignment rather than an in-app
//! route change. Modeling that as a port lets tests assert on the redirect
//! without a browser.

/// Browser-location capability: read the current path, or leave the app
/// entirely by assigning a new location.
pub trait NavigationPort {
    /// Path component of the current location (e.g. `/solve`).
    fn current_path(&self) -> String;

    /// Full-page navigation; control does not return to the app.
    fn assign(&self, url: &str);
}

/// Navigation backed by `window.location`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigation;

impl NavigationPort for BrowserNavigation {
    fn current_path(&self) -> String {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_else(|| "/".to_owned())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            "/".to_owned()
        }
    }

    fn assign(&self, url: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(url);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
        }
    }
}
