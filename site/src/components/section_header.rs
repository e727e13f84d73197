//! Pill title with an optional headline, shared by the content sections.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};

#[component]
pub fn SectionHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    icon: IconKind,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center mb-16 text-center">
            <div class="inline-flex items-center gap-2 px-5 py-2 rounded-full bg-blue-50 text-fraido-blue text-[11px] font-bold uppercase tracking-[0.2em] mb-6 border border-blue-100/50">
                <Icon kind=icon size=16/>
                <span>{title}</span>
            </div>
            {subtitle.map(|text| view! {
                <h2 class="text-3xl md:text-5xl font-semibold text-gray-900 tracking-tight max-w-3xl leading-tight">
                    {text}
                </h2>
            })}
        </div>
    }
}
