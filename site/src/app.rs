//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::{consent::CookieConsent, nav::NavState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="bg-white text-gray-900 antialiased">
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the page-shell state (navigation and cookie consent) and provides it
/// as context so the nav bar, menu, and consent popover share one instance.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let nav = RwSignal::new(NavState::default());
    let consent = RwSignal::new(CookieConsent::default());

    provide_context(nav);
    provide_context(consent);

    view! {
        <Stylesheet id="leptos" href="/pkg/fraido.css"/>
        <Title text="Fraido | Minimal diameter"/>
        <Meta
            name="description"
            content="Fraido develops an endotracheal tube with continuously adjustable diameter."
        />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
