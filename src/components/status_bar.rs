//! Bottom status bar showing connection status and cart figures.

use leptos::prelude::*;

use crate::state::cart::CartState;
use crate::state::orders::CURRENCY;
use crate::state::session::{ConnectionStatus, SessionState};

/// Status bar at the bottom of the session page.
///
/// Shows the realtime connection indicator, the number of units in the cart,
/// and the running cart total.
#[component]
pub fn StatusBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let cart = expect_context::<RwSignal<CartState>>();

    let status_class = move || {
        let status = session.get().connection_status;
        match status {
            ConnectionStatus::Connected => "status-bar__dot status-bar__dot--connected",
            ConnectionStatus::Connecting => "status-bar__dot status-bar__dot--connecting",
            ConnectionStatus::Disconnected => "status-bar__dot status-bar__dot--disconnected",
        }
    };

    let status_label = move || {
        let status = session.get().connection_status;
        match status {
            ConnectionStatus::Connected => "Connected",
            ConnectionStatus::Connecting => "Connecting...",
            ConnectionStatus::Disconnected => "Disconnected",
        }
    };

    let item_count = move || cart.get().item_count();
    let total = move || cart.get().total();

    view! {
        <div class="status-bar">
            <span class="status-bar__connection">
                <span class=status_class></span>
                {status_label}
            </span>
            <span class="status-bar__divider">"|"</span>
            <span class="status-bar__items">{move || format!("{} items in cart", item_count())}</span>
            <span class="status-bar__spacer"></span>
            <span class="status-bar__total">{move || format!("{} {}", total(), CURRENCY)}</span>
        </div>
    }
}
