//! Cart drawer: line items, total, and checkout.

use leptos::prelude::*;

use crate::state::cart::CartState;
use crate::state::orders::{CURRENCY, OrdersState};
use crate::util::{clock, storage};

/// Cart contents and checkout.
///
/// Placing an order drains the cart into the order history; both are
/// persisted so they survive reloads.
#[component]
pub fn CartPanel() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let orders = expect_context::<RwSignal<OrdersState>>();

    let remove = move |index: usize| {
        cart.update(|c| c.remove(index));
        storage::save_cart(&cart.get_untracked());
    };

    let checkout = move |_| {
        let mut next_cart = cart.get_untracked();
        let mut next_orders = orders.get_untracked();
        if next_orders.place(&mut next_cart, clock::now_ms()).is_err() {
            return;
        }
        storage::save_cart(&next_cart);
        storage::save_orders(&next_orders);
        cart.set(next_cart);
        orders.set(next_orders);
    };

    view! {
        <div class="cart-panel">
            <div class="cart-panel__items">
                {move || {
                    let items = cart.get().items;
                    if items.is_empty() {
                        return view! {
                            <div class="cart-panel__empty">"Your cart is empty"</div>
                        }
                            .into_any();
                    }

                    items
                        .iter()
                        .enumerate()
                        .map(|(index, item)| {
                            let name = item.name.clone();
                            let size = item.size.clone();
                            let line = format!("{} x {}", item.price, item.quantity);
                            view! {
                                <div class="cart-panel__item">
                                    <span class="cart-panel__item-name">{name}</span>
                                    <span class="cart-panel__item-size">{size}</span>
                                    <span class="cart-panel__item-line">{line}</span>
                                    <button
                                        class="cart-panel__remove"
                                        title="Remove"
                                        on:click=move |_| remove(index)
                                    >
                                        "✕"
                                    </button>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>

            <div class="cart-panel__footer">
                <span class="cart-panel__total">
                    {move || format!("Total: {} {}", cart.get().total(), CURRENCY)}
                </span>
                <button
                    class="btn btn--primary cart-panel__checkout"
                    on:click=checkout
                    disabled=move || cart.get().is_empty()
                >
                    "Checkout"
                </button>
            </div>

            {move || {
                orders
                    .get()
                    .last()
                    .map(|order| {
                        let text = order.confirmation();
                        view! { <div class="cart-panel__confirmation">{text}</div> }
                    })
            }}
        </div>
    }
}
