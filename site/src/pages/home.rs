//! The single landing page: hero, sticky nav, content sections, footer.

#[cfg(all(test, feature = "ssr"))]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::contacts::ContactsSection;
use crate::components::cookie_consent::CookieConsentPopover;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::idea::IdeaSection;
use crate::components::nav_bar::NavBar;
use crate::components::resources::ResourcesSection;
use crate::components::team::{AdvisorsSection, TeamSection};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen">
            <Hero/>
            <NavBar/>
            <main class="mt-20">
                <IdeaSection/>
                <TeamSection/>
                <AdvisorsSection/>
                <ResourcesSection/>
                <ContactsSection/>
            </main>
            <Footer/>
            <CookieConsentPopover/>
        </div>
    }
}
