//! Full-height hero banner with the brand and primary calls-to-action.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::content::{BRAND, CLAIM, TAGLINE};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header class="relative min-h-[90vh] flex items-center justify-center overflow-hidden">
            <div class="absolute inset-0 animate-gradient"></div>
            <div class="absolute inset-0 hero-texture opacity-10"></div>

            <div class="container mx-auto px-4 relative z-10">
                <div class="flex flex-col items-center text-center">
                    <div class="mb-10">
                        <span class="px-6 py-2.5 rounded-full glass text-white text-[11px] font-medium uppercase tracking-[0.3em] border border-white/20">
                            {TAGLINE}
                        </span>
                    </div>

                    <h1 class="text-7xl md:text-[10rem] font-bold text-white tracking-tighter leading-none mb-8 drop-shadow-xl">
                        {BRAND}
                    </h1>

                    <div class="max-w-2xl text-white/90">
                        <p class="text-xl md:text-2xl font-light mb-10 tracking-wide opacity-80 uppercase">
                            {CLAIM}
                        </p>
                        <div class="flex flex-wrap justify-center gap-5">
                            <a
                                href="#idea"
                                class="px-10 py-4 bg-white text-fraido-blue rounded-full font-semibold shadow-xl hover:shadow-2xl hover:scale-105 transition-all flex items-center gap-2"
                            >
                                "Our Idea"
                                <Icon kind=IconKind::ArrowRight size=18/>
                            </a>
                            <a
                                href="#deck"
                                class="px-10 py-4 glass text-white rounded-full font-semibold hover:bg-white/10 transition-all border border-white/30"
                            >
                                "Pitch Deck"
                            </a>
                        </div>
                    </div>
                </div>
            </div>

            <div class="absolute -bottom-1 left-0 right-0 h-32 bg-white clip-path-slant"></div>
        </header>
    }
}
