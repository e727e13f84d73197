use leptos::prelude::*;

use crate::content::{BRAND, COPYRIGHT, MOTTO};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-16 bg-white border-t border-gray-100">
            <div class="max-w-6xl mx-auto px-4 flex flex-col md:flex-row justify-between items-center gap-8">
                <div class="flex flex-col items-center md:items-start">
                    <span class="font-bold text-fraido-blue tracking-tighter text-2xl">{BRAND}</span>
                    <span class="text-[10px] text-gray-400 uppercase tracking-[0.3em] mt-1">{MOTTO}</span>
                </div>
                <div class="flex items-center gap-8 text-[11px] text-gray-400 uppercase tracking-widest font-medium">
                    <a href="#" class="hover:text-fraido-blue transition-colors">"Privacy"</a>
                    <a href="#" class="hover:text-fraido-blue transition-colors">"Legal"</a>
                    <span>{COPYRIGHT}</span>
                </div>
            </div>
        </footer>
    }
}
