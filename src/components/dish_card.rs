//! Dish Card Component
//!
//! A single catalog dish with an add button.

use leptos::prelude::*;

use menu_domain::MenuItem;

use crate::config::AppConfig;
use crate::store::{store_add_item, use_menu_store};

/// Catalog card; "+" appends the dish to the selection
#[component]
pub fn DishCard(item: MenuItem) -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig should be provided");
    let store = use_menu_store();

    let name = item.name.clone();
    let description = item.description.clone();
    let price_label = item.price_label(&config.currency);

    view! {
        <div class="dish-card">
            <div class="dish-card-body">
                <span class="dish-card-title">{name}</span>
                <span class="dish-card-desc">{description}</span>
                <span class="dish-card-price">{price_label}</span>
            </div>
            <button class="dish-add-btn" on:click=move |_| store_add_item(&store, item.clone())>"+"</button>
        </div>
    }
}
