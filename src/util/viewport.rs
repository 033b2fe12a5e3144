//! Viewport queries.
//!
//! Reads `window.innerWidth` in the browser. Outside a browser build there is
//! no viewport, and callers treat `None` as the desktop layout.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Current viewport width in logical pixels, if running in a browser.
pub fn inner_width() -> Option<f64> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window()?;
        match window.inner_width() {
            Ok(value) => value.as_f64(),
            Err(err) => {
                log::warn!("viewport: innerWidth unavailable: {err:?}");
                None
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Width used for layout decisions; desktop-sized when unknown.
#[must_use]
pub fn width_or_desktop(width: Option<f64>) -> f64 {
    width.unwrap_or(f64::INFINITY)
}
