//! Bottom Navigation Component
//!
//! Mobile tab bar switching between the three screens.

use leptos::prelude::*;

use crate::context::{AppContext, Screen};
use crate::store::{store_total_items, use_menu_store};

const NAV_TABS: &[(Screen, &str, &str)] = &[
    (Screen::Home, "🍽", "Menu"),
    (Screen::AddDish, "➕", "Add Dish"),
    (Screen::Selection, "🧾", "Selection"),
];

#[component]
pub fn BottomNav() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_menu_store();

    view! {
        <nav class="mobile-nav">
            {NAV_TABS.iter().map(|(screen, icon, label)| {
                let screen = *screen;
                let badge = move || {
                    let count = store_total_items(&store);
                    (screen == Screen::Selection && count > 0).then(|| view! {
                        <span class="mobile-nav-badge">{count}</span>
                    })
                };
                view! {
                    <button
                        class=move || if ctx.screen.get() == screen { "mobile-nav-item active" } else { "mobile-nav-item" }
                        on:click=move |_| ctx.navigate(screen)
                    >
                        <div class="mobile-nav-icon">{*icon}</div>
                        <div class="mobile-nav-label">{*label}</div>
                        {badge}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
