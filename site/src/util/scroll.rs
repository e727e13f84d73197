//! Window scroll tracking and smooth scrolling to section anchors.
//!
//! `watch_scroll` registers a window `scroll` listener and removes it when
//! the owning reactive scope is cleaned up, so a page view never leaves a
//! dangling observer behind.

#[cfg(feature = "hydrate")]
use leptos::prelude::*;

/// Current vertical scroll offset in CSS pixels (`0.0` outside a browser).
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Call `on_scroll` with the current offset once hydration has settled and
/// then on every window scroll until the calling component is torn down.
pub fn watch_scroll<F>(on_scroll: F)
where
    F: Fn(f64) + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        let on_scroll = std::rc::Rc::new(on_scroll);
        let initial = std::rc::Rc::clone(&on_scroll);
        // First read waits for hydration so server-rendered classes get diffed.
        Effect::new(move |_| initial(scroll_y()));
        let handle = window_event_listener(leptos::ev::scroll, move |_| on_scroll(scroll_y()));
        on_cleanup(move || {
            log::debug!("removing window scroll listener");
            handle.remove();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_scroll;
    }
}

/// Smooth-scroll the element with `id` into view.
///
/// Returns `false` when there is no browser or no such element, in which case
/// the caller should let the link's default fragment navigation happen.
pub fn scroll_to_section(id: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            log::warn!("no section with id {id}");
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        false
    }
}
