//! Product catalog grid with name search and add-to-cart controls.

use leptos::prelude::*;

use crate::state::cart::CartState;
use crate::state::catalog::{self, ProductFilter};
use crate::util::storage;

/// Catalog cards with a search box; each size button adds one unit to the
/// cart.
#[component]
pub fn ProductGrid() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();

    let query = RwSignal::new(String::new());

    let results = move || {
        let text = query.get();
        let trimmed = text.trim();
        let filter = ProductFilter {
            name: (!trimmed.is_empty()).then(|| trimmed.to_owned()),
            ..ProductFilter::default()
        };
        catalog::search(&filter)
    };

    // Ids come from the catalog itself, so `add` cannot fail here.
    let add = move |product_id: &'static str, size: &'static str| {
        cart.update(|c| {
            let _ = c.add(product_id, size, 1);
        });
        storage::save_cart(&cart.get_untracked());
    };

    view! {
        <div class="product-grid">
            <input
                class="product-grid__search"
                type="text"
                placeholder="Search products..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />

            <div class="product-grid__cards">
                {move || {
                    let products = results();
                    if products.is_empty() {
                        return view! {
                            <div class="product-grid__empty">"No matching products"</div>
                        }
                            .into_any();
                    }

                    products
                        .into_iter()
                        .map(|product| {
                            view! {
                                <div class="product-card">
                                    <span class="product-card__name">{product.name}</span>
                                    <span class="product-card__description">{product.description}</span>
                                    <span class="product-card__price">
                                        {format!("{} {}", product.price, product.currency)}
                                    </span>
                                    <div class="product-card__sizes">
                                        {product
                                            .sizes
                                            .iter()
                                            .map(|size| {
                                                let size = *size;
                                                view! {
                                                    <button
                                                        class="btn product-card__size"
                                                        title=format!("Add {} ({size})", product.name)
                                                        on:click=move |_| add(product.id, size)
                                                    >
                                                        {size}
                                                    </button>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>
        </div>
    }
}
