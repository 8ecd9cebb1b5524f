//! Header Component
//!
//! Restaurant title with the live selection counter.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::store::{store_total_items, use_menu_store};

/// Home-screen header
#[component]
pub fn Header() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig should be provided");
    let store = use_menu_store();

    view! {
        <header class="menu-header">
            <span class="menu-header-title">"🍴 " {config.title}</span>
            <span class="menu-header-counter">
                {move || format!("Selected dishes: {}", store_total_items(&store))}
            </span>
        </header>
    }
}
