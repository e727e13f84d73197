//! Cookie-consent popover and its floating toggle.
//!
//! Reads the shared [`CookieConsent`] from context. Acceptance only lives for
//! the page session.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::state::consent::CookieConsent;

#[component]
pub fn CookieConsentPopover() -> impl IntoView {
    let consent = expect_context::<RwSignal<CookieConsent>>();

    let visible = move || consent.get().is_visible();
    let accept = move |_| {
        consent.update(CookieConsent::accept);
        log::info!("cookie consent accepted");
    };
    let toggle = move |_| consent.update(CookieConsent::toggle);

    view! {
        <div class="fixed bottom-10 right-10 z-[100] flex flex-col items-end gap-4">
            <Show when=visible>
                <div class="glass w-80 p-8 rounded-[3rem] shadow-2xl border border-white/60" role="dialog" aria-label="Cookie consent">
                    <p class="text-[12px] leading-relaxed text-gray-600 mb-6 font-light italic">
                        "Enhancing your digital medical experience through optimized cookies."
                    </p>
                    <button
                        class="w-full py-3.5 bg-fraido-blue text-white text-[11px] font-bold uppercase rounded-2xl hover:bg-blue-600 transition-all shadow-lg"
                        on:click=accept
                    >
                        "Accept All"
                    </button>
                </div>
            </Show>
            <button
                class="w-16 h-16 bg-fraido-blue rounded-full shadow-2xl flex items-center justify-center text-white cursor-pointer hover:scale-110 transition-transform"
                aria-label="Cookie preferences"
                on:click=toggle
            >
                <Icon kind=IconKind::ShieldCheck size=28/>
            </button>
        </div>
    }
}
