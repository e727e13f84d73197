//! Contact section with email and phone cards.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::content::{CONTACTS, ContactChannel, ContactKind, section};

#[component]
fn ContactCard(channel: &'static ContactChannel) -> impl IntoView {
    let icon = match channel.kind {
        ContactKind::Email => IconKind::Mail,
        ContactKind::Phone => IconKind::Phone,
    };

    view! {
        <a
            href=channel.href()
            class="flex items-center gap-6 p-6 rounded-[2rem] bg-white border border-gray-100 shadow-sm hover:shadow-xl hover:-translate-y-1 transition-all group"
        >
            <span class="w-14 h-14 rounded-2xl bg-blue-50 text-fraido-blue flex items-center justify-center group-hover:bg-fraido-blue group-hover:text-white transition-colors">
                <Icon kind=icon size=22/>
            </span>
            <span class="text-left">
                <span class="block text-[10px] font-bold text-gray-400 uppercase tracking-widest mb-1">{channel.label}</span>
                <span class="block text-lg font-medium text-gray-900 tracking-tight">{channel.value}</span>
            </span>
        </a>
    }
}

#[component]
pub fn ContactsSection() -> impl IntoView {
    view! {
        <section id=section::CONTACTS class="py-32 bg-fraido-light relative overflow-hidden">
            <div class="absolute -bottom-24 -right-24 text-fraido-blue/5 pointer-events-none">
                <Icon kind=IconKind::Globe size=420/>
            </div>

            <div class="max-w-4xl mx-auto px-4 text-center relative z-10">
                <h2 class="text-5xl md:text-7xl font-semibold text-gray-900 tracking-tighter mb-6">"Get in touch."</h2>
                <p class="text-gray-500 text-lg font-light mb-16">
                    "Interested in our technology or in partnering with us? Reach out."
                </p>
                <div class="grid md:grid-cols-2 gap-6">
                    {CONTACTS.iter().map(|channel| view! { <ContactCard channel=channel/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}
