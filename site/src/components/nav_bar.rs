//! Sticky navigation bar with a collapsible mobile menu.
//!
//! The bar restyles itself once the window scrolls past
//! [`SCROLLED_THRESHOLD_PX`](crate::state::nav::SCROLLED_THRESHOLD_PX). The
//! scroll listener lives exactly as long as this component.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::content::{NAV_CTA, NAV_LINKS, NavLink};
use crate::state::nav::NavState;
use crate::util::scroll::{scroll_to_section, watch_scroll};

/// Click handler shared by every in-page link: smooth-scroll and close the menu.
fn on_link_click(nav: RwSignal<NavState>, anchor: &'static str) -> impl Fn(leptos::ev::MouseEvent) + Clone + 'static {
    move |ev: leptos::ev::MouseEvent| {
        if scroll_to_section(anchor) {
            ev.prevent_default();
        }
        nav.update(NavState::select_link);
    }
}

#[component]
fn DesktopLink(link: &'static NavLink) -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    view! {
        <a
            href=link.href()
            class="text-[11px] font-semibold text-gray-500 hover:text-fraido-blue transition-colors tracking-widest uppercase"
            on:click=on_link_click(nav, link.anchor)
        >
            {link.label}
        </a>
    }
}

#[component]
fn MobileLink(link: &'static NavLink) -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    view! {
        <a
            href=link.href()
            class="block px-4 py-3 rounded-xl text-xs font-semibold text-gray-600 hover:bg-blue-50 hover:text-fraido-blue tracking-widest uppercase"
            on:click=on_link_click(nav, link.anchor)
        >
            {link.label}
        </a>
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    watch_scroll(move |y| nav.maybe_update(|state| state.set_scroll_y(y)));

    let bar_class = move || {
        format!(
            "max-w-4xl mx-auto glass rounded-2xl px-8 py-3.5 border flex justify-between items-center transition-all duration-500 {}",
            nav.get().style().class()
        )
    };
    let menu_open = move || nav.get().menu_open;
    let toggle_menu = move |_| nav.update(NavState::toggle_menu);

    view! {
        <nav class="sticky top-6 z-50 px-4">
            <div class=bar_class>
                <a href="#" class="font-bold text-fraido-blue tracking-tighter text-2xl">"F."</a>

                <div class="hidden md:flex gap-10 items-center">
                    {NAV_LINKS.iter().map(|link| view! { <DesktopLink link=link/> }).collect_view()}
                </div>

                <div class="flex items-center gap-3">
                    <a
                        href=NAV_CTA.href()
                        class="bg-fraido-blue text-white text-[11px] font-bold px-6 py-2.5 rounded-xl uppercase tracking-widest hover:bg-blue-600 transition-all shadow-md"
                        on:click=on_link_click(nav, NAV_CTA.anchor)
                    >
                        {NAV_CTA.label}
                    </a>
                    <button
                        class="md:hidden p-2 rounded-lg text-gray-500 hover:bg-blue-50 transition-colors"
                        aria-label="Toggle navigation menu"
                        aria-expanded=move || menu_open().to_string()
                        on:click=toggle_menu
                    >
                        {move || {
                            let kind = if menu_open() { IconKind::X } else { IconKind::Menu };
                            view! { <Icon kind=kind size=20/> }
                        }}
                    </button>
                </div>
            </div>

            <Show when=menu_open>
                <div class="md:hidden max-w-4xl mx-auto mt-2 glass rounded-2xl p-3 shadow-xl border border-white/40">
                    {NAV_LINKS.iter().map(|link| view! { <MobileLink link=link/> }).collect_view()}
                </div>
            </Show>
        </nav>
    }
}
