//! Dark "Deck & Pitches" section: embedded flip-book deck plus pitch videos.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::components::video_card::VideoCard;
use crate::content::{DECK, PITCHES, section};

#[component]
pub fn ResourcesSection() -> impl IntoView {
    view! {
        <section id=section::DECK class="py-24 bg-gray-900 text-white relative overflow-hidden">
            <div class="absolute top-0 right-0 w-[500px] h-[500px] bg-fraido-blue/10 rounded-full blur-[100px] -translate-y-1/2 translate-x-1/2"></div>

            <div class="max-w-6xl mx-auto px-4 relative z-10">
                <div class="flex flex-col items-center mb-20 text-center">
                    <div class="inline-flex items-center gap-2 px-5 py-2 rounded-full bg-white/5 border border-white/10 text-fraido-blue text-[11px] font-bold uppercase tracking-[0.2em] mb-6">
                        <Icon kind=IconKind::FileText size=16/>
                        <span>"Resources"</span>
                    </div>
                    <h2 class="text-4xl md:text-6xl font-semibold tracking-tighter">"Deck & Pitches"</h2>
                </div>

                <div class="grid lg:grid-cols-12 gap-16">
                    <div class="lg:col-span-7 space-y-8">
                        <div class="flex items-center justify-between">
                            <h3 class="text-2xl font-medium tracking-tight">"Business Deck"</h3>
                            <a
                                href=DECK.pdf_url
                                target="_blank"
                                rel="noopener"
                                class="text-[11px] font-bold text-fraido-blue hover:text-white transition-colors flex items-center gap-2 uppercase tracking-widest"
                            >
                                "Download PDF"
                                <Icon kind=IconKind::ArrowRight size=14/>
                            </a>
                        </div>
                        <div class="aspect-[4/3] w-full bg-white/5 rounded-[2.5rem] overflow-hidden border border-white/10 shadow-2xl">
                            <iframe
                                src=DECK.flipbook_url
                                title="Fraido business deck"
                                class="w-full h-full"
                                allowfullscreen=true
                            ></iframe>
                        </div>
                    </div>

                    <div id=section::PITCHES class="lg:col-span-5 space-y-8">
                        <h3 class="text-2xl font-medium tracking-tight">"Pitches"</h3>
                        <div class="space-y-6">
                            {PITCHES.iter().map(|resource| view! { <VideoCard resource=resource/> }).collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
