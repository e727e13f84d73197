//! "Our Idea" section: the product narrative beside the interactive tube.

use leptos::prelude::*;

use crate::components::diameter_illustration::DiameterIllustration;
use crate::components::icon::IconKind;
use crate::components::section_header::SectionHeader;
use crate::content::{IDEA_IMAGE, section};

#[component]
pub fn IdeaSection() -> impl IntoView {
    view! {
        <section id=section::IDEA class="py-24">
            <div class="max-w-6xl mx-auto px-4">
                <SectionHeader
                    title="Our Idea"
                    subtitle="Innovation in endotracheal intubation"
                    icon=IconKind::Lightbulb
                />

                <div class="grid lg:grid-cols-2 gap-24 items-center">
                    <div class="relative order-2 lg:order-1 space-y-10">
                        <div class="absolute -top-12 -left-12 w-48 h-48 bg-blue-50 rounded-full blur-3xl opacity-70"></div>
                        <div class="relative rounded-[3rem] overflow-hidden shadow-[0_30px_60px_-15px_rgba(0,0,0,0.1)] group">
                            <img
                                src=IDEA_IMAGE
                                alt="Fraido Innovation"
                                class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-1000"
                            />
                            <div class="absolute inset-0 bg-gradient-to-t from-black/40 via-transparent to-transparent flex items-end p-10">
                                <p class="text-white text-[10px] font-medium uppercase tracking-[0.2em] opacity-90">
                                    "Proprietary Patent Technology"
                                </p>
                            </div>
                        </div>
                        <DiameterIllustration/>
                    </div>

                    <div class="space-y-8 order-1 lg:order-2">
                        <div class="space-y-6 text-gray-600 text-lg leading-relaxed font-light">
                            <p>
                                "During endotracheal intubation, "
                                <span class="text-gray-900 font-medium">"every second matters"</span>
                                ". The number of attempts and time-to-intubation are key markers for identifying a successful procedure."
                            </p>
                            <p>
                                "Our company has filed a patent for a technology enabling the "
                                <span class="text-fraido-blue font-medium">"continuous regulation of a tube's diameter"</span>
                                ". This allows an endotracheal tube to act as the introducer and expand once in place, reducing time-to-intubation, attempts, and trauma."
                            </p>
                            <p>"Diameter control also enables safe-extubation and intraoperative adjustments."</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
