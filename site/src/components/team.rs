//! Team and advisor sections.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::components::section_header::SectionHeader;
use crate::content::{ADVISORS, Advisor, CardLayout, TEAM, TeamMember, section};

/// Wide card with the portrait beside the bio.
#[component]
fn FeaturedMemberCard(member: &'static TeamMember) -> impl IntoView {
    view! {
        <div class="md:col-span-7 group relative bg-white rounded-[2.5rem] p-12 border border-gray-100/80 shadow-sm hover:shadow-2xl transition-all duration-500">
            <div class="flex flex-col md:flex-row gap-10 items-center md:items-start">
                <img
                    src=member.image
                    alt=member.name
                    class="w-44 h-44 rounded-[2rem] object-cover shadow-lg grayscale group-hover:grayscale-0 transition-all duration-700"
                />
                <div>
                    <h3 class="text-2xl font-bold text-gray-900 mb-1 tracking-tight">{member.name}</h3>
                    <p class="text-fraido-blue font-bold text-[11px] uppercase tracking-[0.2em] mb-5">{member.role}</p>
                    <p class="text-sm text-gray-500 leading-relaxed font-light mb-8">{member.bio}</p>
                    <a
                        href=member.profile_url
                        class="inline-flex items-center gap-2 text-[11px] font-bold text-gray-400 hover:text-fraido-blue transition-colors tracking-widest"
                    >
                        <Icon kind=IconKind::Linkedin size=14/>
                        "LINKEDIN"
                    </a>
                </div>
            </div>
        </div>
    }
}

/// Narrow card with a round portrait above the bio.
#[component]
fn CompactMemberCard(member: &'static TeamMember) -> impl IntoView {
    view! {
        <div class="md:col-span-5 group bg-white rounded-[2.5rem] p-12 border border-gray-100/80 shadow-sm hover:shadow-2xl transition-all duration-500">
            <div class="flex flex-col items-center text-center">
                <img
                    src=member.image
                    alt=member.name
                    class="w-32 h-32 rounded-full object-cover shadow-lg mb-8 border-4 border-white group-hover:scale-105 transition-transform duration-700"
                />
                <h3 class="text-xl font-bold text-gray-900 tracking-tight">{member.name}</h3>
                <p class="text-fraido-blue font-bold text-[11px] uppercase tracking-[0.2em] mb-5">{member.role}</p>
                <p class="text-[13px] text-gray-500 leading-relaxed font-light mb-8">{member.bio}</p>
                <a
                    href=member.profile_url
                    class="text-gray-400 hover:text-fraido-blue transition-colors"
                    aria-label=format!("{} on LinkedIn", member.name)
                >
                    <Icon kind=IconKind::Linkedin size=22/>
                </a>
            </div>
        </div>
    }
}

#[component]
fn AdvisorCard(advisor: &'static Advisor) -> impl IntoView {
    view! {
        <div class="group p-8 bg-white rounded-[2.5rem] border border-gray-100/60 shadow-sm hover:shadow-xl hover:-translate-y-1 transition-all flex flex-col items-center text-center">
            <img
                src=advisor.image
                alt=advisor.name
                class="w-20 h-20 rounded-full object-cover mb-6 grayscale group-hover:grayscale-0 transition-all duration-500 border-2 border-transparent group-hover:border-fraido-blue/20"
            />
            <h4 class="font-bold text-gray-900 mb-3 tracking-tight">{advisor.name}</h4>
            <p class="text-[11px] text-gray-400 font-medium uppercase tracking-widest leading-relaxed opacity-80">
                {advisor.credentials}
            </p>
        </div>
    }
}

#[component]
pub fn TeamSection() -> impl IntoView {
    let cards = TEAM
        .iter()
        .map(|member| match member.layout {
            CardLayout::Featured => view! { <FeaturedMemberCard member=member/> }.into_any(),
            CardLayout::Compact => view! { <CompactMemberCard member=member/> }.into_any(),
        })
        .collect_view();

    view! {
        <section id=section::TEAM class="py-24 bg-gray-50/40">
            <div class="max-w-6xl mx-auto px-4">
                <SectionHeader title="Our Team" subtitle="The people behind Fraido" icon=IconKind::Users/>
                <div class="grid md:grid-cols-12 gap-10">{cards}</div>
            </div>
        </section>
    }
}

#[component]
pub fn AdvisorsSection() -> impl IntoView {
    view! {
        <section id=section::ADVISORS class="py-24">
            <div class="max-w-6xl mx-auto px-4">
                <SectionHeader title="Our Advisors" subtitle="Medical Expertise" icon=IconKind::Users/>
                <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-8">
                    {ADVISORS.iter().map(|advisor| view! { <AdvisorCard advisor=advisor/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}
