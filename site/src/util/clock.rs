//! Interval-driven animation clock for cosmetic motion.

use std::time::Duration;

use leptos::prelude::*;

/// Roughly 30 frames per second; enough for drifting particles.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Milliseconds elapsed since the calling component mounted.
///
/// In the browser the signal advances every `period` until the component is
/// cleaned up, which clears the interval. On the server it stays at `0.0`.
pub fn elapsed_ms(period: Duration) -> ReadSignal<f64> {
    let (elapsed, set_elapsed) = signal(0.0_f64);

    #[cfg(feature = "hydrate")]
    {
        let started = js_sys::Date::now();
        match set_interval_with_handle(move || set_elapsed.set(js_sys::Date::now() - started), period) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => log::warn!("animation clock unavailable: {e:?}"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (period, set_elapsed);
    }

    elapsed
}
