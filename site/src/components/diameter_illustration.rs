//! Draggable illustration of the adjustable-diameter tube.
//!
//! SYSTEM CONTEXT
//! ==============
//! The component owns one `tube::slider::Slider`. Pointer and touch events on
//! the drawing surface drive its `Idle`/`Dragging` state machine; the tube
//! outline, lumen, handle position, and percentage label are all derived from
//! the slider's regulation value on each change. Particles drift on a separate
//! animation clock and ignore the regulation value.

use leptos::prelude::*;
use tube::consts::{
    HANDLE_HEIGHT, HANDLE_WIDTH, TRACK_HEIGHT, TRACK_START_X, TRACK_WIDTH, TRACK_Y, VIEWBOX_HEIGHT,
    VIEWBOX_WIDTH,
};
use tube::particles::particles_at;
use tube::regulation::track_handle_offset;
use tube::slider::{Slider, SliderEvent};

#[cfg(feature = "hydrate")]
use crate::util::pointer::{pointer_client_x, surface_bounds, touch_client_x};
use crate::util::clock::{FRAME_INTERVAL, elapsed_ms};

fn fmt_units(value: f64) -> String {
    format!("{value:.2}")
}

#[component]
pub fn DiameterIllustration() -> impl IntoView {
    let slider = RwSignal::new(Slider::new());
    let surface_ref = NodeRef::<leptos::html::Div>::new();
    let elapsed = elapsed_ms(FRAME_INTERVAL);

    let outer_path = Memo::new(move |_| slider.get().profile().boundary().to_svg_path());
    let lumen_path = Memo::new(move |_| slider.get().profile().lumen().boundary().to_svg_path());
    let label = Memo::new(move |_| slider.get().label());
    let handle_x = move || fmt_units(TRACK_START_X + track_handle_offset(slider.get().regulation()));
    let fill_width = move || fmt_units(track_handle_offset(slider.get().regulation()) + (HANDLE_WIDTH * 0.5));
    let dragging = move || slider.get().is_dragging();

    let on_down = move |ev: leptos::ev::PointerEvent| {
        ev.prevent_default();
        slider.maybe_update(|s| s.handle(SliderEvent::Down));
    };

    let on_touch_start = move |_ev: leptos::ev::TouchEvent| {
        slider.maybe_update(|s| s.handle(SliderEvent::Down));
    };

    let on_move = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::PointerEvent| {
                let Some(surface) = surface_ref.get_untracked() else {
                    return;
                };
                let event = SliderEvent::Move { pointer_x: pointer_client_x(&ev), bounds: surface_bounds(&surface) };
                slider.maybe_update(|s| s.handle(event));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_touch_move = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::TouchEvent| {
                let (Some(surface), Some(pointer_x)) = (surface_ref.get_untracked(), touch_client_x(&ev)) else {
                    return;
                };
                let event = SliderEvent::Move { pointer_x, bounds: surface_bounds(&surface) };
                slider.maybe_update(|s| s.handle(event));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    let on_up = move |_ev: leptos::ev::PointerEvent| {
        slider.maybe_update(|s| s.handle(SliderEvent::Up));
    };

    let on_leave = move |_ev: leptos::ev::PointerEvent| {
        slider.maybe_update(|s| s.handle(SliderEvent::Leave));
    };

    let on_touch_end = move |_ev: leptos::ev::TouchEvent| {
        slider.maybe_update(|s| s.handle(SliderEvent::Up));
    };

    let particles = move || {
        particles_at(elapsed.get())
            .into_iter()
            .map(|p| {
                view! {
                    <circle
                        cx=fmt_units(p.center.x)
                        cy=fmt_units(p.center.y)
                        r=fmt_units(p.radius)
                        class="fill-fraido-blue/60"
                    ></circle>
                }
            })
            .collect_view()
    };

    let view_box = format!("0 0 {VIEWBOX_WIDTH} {VIEWBOX_HEIGHT}");
    let handle_y = fmt_units(TRACK_Y + (TRACK_HEIGHT * 0.5) - (HANDLE_HEIGHT * 0.5));

    view! {
        <figure class="diameter-illustration relative rounded-[3rem] bg-fraido-light p-8 shadow-[0_30px_60px_-15px_rgba(0,0,0,0.1)]">
            <div
                class=move || {
                    if dragging() {
                        "select-none touch-none cursor-grabbing"
                    } else {
                        "select-none touch-none"
                    }
                }
                node_ref=surface_ref
                on:pointermove=on_move
                on:pointerup=on_up
                on:pointercancel=on_up
                on:pointerleave=on_leave
                on:touchmove=on_touch_move
                on:touchend=on_touch_end
                on:touchcancel=on_touch_end
            >
                <svg viewBox=view_box class="w-full h-auto" role="img" aria-label="Tube with adjustable diameter">
                    <path d=move || outer_path.get() class="fill-blue-100 stroke-fraido-blue" stroke-width="2"></path>
                    <path d=move || lumen_path.get() class="fill-white"></path>
                    <g class="tube-particles">{particles}</g>

                    <rect
                        x=fmt_units(TRACK_START_X)
                        y=fmt_units(TRACK_Y)
                        width=fmt_units(TRACK_WIDTH)
                        height=fmt_units(TRACK_HEIGHT)
                        rx="4"
                        class="fill-gray-200 cursor-pointer"
                        on:pointerdown=on_down
                        on:touchstart=on_touch_start
                    ></rect>
                    <rect
                        x=fmt_units(TRACK_START_X)
                        y=fmt_units(TRACK_Y)
                        width=fill_width
                        height=fmt_units(TRACK_HEIGHT)
                        rx="4"
                        class="fill-fraido-blue/40 pointer-events-none"
                    ></rect>
                    <rect
                        x=handle_x
                        y=handle_y
                        width=fmt_units(HANDLE_WIDTH)
                        height=fmt_units(HANDLE_HEIGHT)
                        rx="8"
                        class="fill-fraido-blue cursor-grab"
                        on:pointerdown=on_down
                        on:touchstart=on_touch_start
                    ></rect>
                </svg>
            </div>
            <figcaption class="mt-6 flex justify-between items-center text-[11px] font-bold uppercase tracking-[0.2em] text-gray-500">
                <span>"Drag to regulate the diameter"</span>
                <span class="text-fraido-blue text-base tabular-nums">{move || label.get()}</span>
            </figcaption>
        </figure>
    }
}
