//! Pointer and touch helpers for drag controls.

#[cfg(feature = "hydrate")]
use tube::regulation::TrackBounds;

/// On-screen horizontal extent of a drawing surface.
#[cfg(feature = "hydrate")]
pub fn surface_bounds(element: &web_sys::HtmlDivElement) -> TrackBounds {
    let rect = element.get_bounding_client_rect();
    TrackBounds::new(rect.left(), rect.width())
}

/// Horizontal client position of a pointer event.
#[cfg(feature = "hydrate")]
pub fn pointer_client_x(ev: &leptos::ev::PointerEvent) -> f64 {
    f64::from(ev.client_x())
}

/// Horizontal client position of the first active touch, if any.
#[cfg(feature = "hydrate")]
pub fn touch_client_x(ev: &leptos::ev::TouchEvent) -> Option<f64> {
    ev.touches().get(0).map(|touch| f64::from(touch.client_x()))
}
