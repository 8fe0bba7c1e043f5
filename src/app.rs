//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::session::SessionPage;
use crate::state::cart::CartState;
use crate::state::chat::ChatState;
use crate::state::orders::OrdersState;
use crate::state::session::SessionState;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let chat = RwSignal::new(ChatState::default());
    let session = RwSignal::new(SessionState::default());
    let cart = RwSignal::new(CartState::default());
    let orders = RwSignal::new(OrdersState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(chat);
    provide_context(session);
    provide_context(cart);
    provide_context(orders);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/jacferdi-client.css"/>
        <Title text="Jacferdi Studios"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=SessionPage/>
            </Routes>
        </Router>
    }
}
