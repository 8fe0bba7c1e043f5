//! Session page — transcript, greeting overlay, catalog, and cart.

use leptos::prelude::*;

use crate::components::cart_panel::CartPanel;
use crate::components::greeting_overlay::GreetingOverlay;
use crate::components::product_grid::ProductGrid;
use crate::components::status_bar::StatusBar;
use crate::components::transcript_panel::TranscriptPanel;
use crate::state::cart::CartState;
use crate::state::orders::OrdersState;
use crate::state::ui::UiState;
use crate::util::storage;

/// Main session page.
///
/// Restores the persisted cart and order history on mount, then composes the
/// transcript (with the greeting floated above it), the product grid, the
/// collapsible cart drawer, and the status bar.
#[component]
pub fn SessionPage() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let orders = expect_context::<RwSignal<OrdersState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let restored = RwSignal::new(false);

    Effect::new(move || {
        if restored.get() {
            return;
        }

        cart.set(storage::load_cart());
        orders.set(storage::load_orders());
        restored.set(true);
    });

    let cart_open = move || ui.get().cart_open;
    let toggle_cart = move |_| ui.update(|u| u.cart_open = !u.cart_open);

    view! {
        <div class="session-page">
            <div class="session-page__transcript">
                <TranscriptPanel/>
                <GreetingOverlay/>
            </div>

            <div class="session-page__catalog">
                <ProductGrid/>
            </div>

            <div class="session-page__cart">
                <button class="session-page__cart-toggle" on:click=toggle_cart>
                    {move || if cart_open() { "Hide cart" } else { "Show cart" }}
                </button>
                <Show when=cart_open>
                    <CartPanel/>
                </Show>
            </div>

            <div class="session-page__status-bar">
                <StatusBar/>
            </div>
        </div>
    }
}
