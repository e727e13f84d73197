//! Pitch card with a lazily mounted video player.
//!
//! Hosted embeds stay dormant (thumbnail + play button) until the visitor
//! activates them; the iframe is only mounted after that. Media files play in
//! a native `<video>` element straight away.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::content::{PitchResource, VideoSource};
use crate::state::video::VideoCardState;

#[component]
fn EmbedPlayer(title: &'static str, source: VideoSource) -> impl IntoView {
    let state = RwSignal::new(VideoCardState::default());
    let thumbnail = source.thumbnail_url().unwrap_or_default();
    let embed = source.embed_url().unwrap_or_default();

    let activate = move |_| {
        if state.try_update(VideoCardState::activate).unwrap_or(false) {
            log::debug!("video card activated: {title}");
        }
    };

    view! {
        <div class="aspect-video rounded-2xl overflow-hidden bg-black/60 relative ring-1 ring-white/10 group-hover:ring-fraido-blue/50 transition-all">
            <Show
                when=move || state.get().is_active()
                fallback=move || {
                    view! {
                        <button
                            class="absolute inset-0 w-full h-full cursor-pointer"
                            aria-label=format!("Play {title}")
                            on:click=activate
                        >
                            <img src=thumbnail.clone() alt=title class="w-full h-full object-cover opacity-70"/>
                            <span class="absolute inset-0 flex items-center justify-center bg-black/40 group-hover:bg-transparent transition-all">
                                <Icon kind=IconKind::Play size=40 filled=true class="text-white drop-shadow-lg"/>
                            </span>
                        </button>
                    }
                }
            >
                <iframe
                    class="w-full h-full"
                    src=embed.clone()
                    title=title
                    allow="autoplay; encrypted-media; picture-in-picture"
                    allowfullscreen=true
                ></iframe>
            </Show>
        </div>
    }
}

#[component]
fn FilePlayer(url: &'static str) -> impl IntoView {
    view! {
        <div class="aspect-video rounded-2xl overflow-hidden bg-black/60 ring-1 ring-white/10">
            <video controls=true preload="metadata" class="w-full h-full">
                <source src=url type="video/mp4"/>
            </video>
        </div>
    }
}

#[component]
pub fn VideoCard(resource: &'static PitchResource) -> impl IntoView {
    let player = match resource.video {
        VideoSource::YouTube(_) => view! { <EmbedPlayer title=resource.title source=resource.video/> }.into_any(),
        VideoSource::File(url) => view! { <FilePlayer url=url/> }.into_any(),
    };

    view! {
        <div class="p-8 rounded-[2rem] bg-white/5 border border-white/10 hover:bg-white/[0.08] transition-colors group">
            <div class="flex justify-between items-center mb-6">
                <p class="text-[10px] font-bold text-fraido-blue uppercase tracking-widest">{resource.date}</p>
                <span class="text-[10px] text-white/30 uppercase font-medium">{resource.category}</span>
            </div>
            <h4 class="text-xl font-medium mb-6 tracking-tight">{resource.title}</h4>
            {player}
        </div>
    }
}
