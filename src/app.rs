//! Cuisine Menu App
//!
//! Mobile layout: notice banner, the current screen, and bottom navigation.

use leptos::prelude::*;

use crate::components::{AddDishForm, BottomNav, CatalogView, Header, NoticeBanner, SelectionList};
use crate::config::AppConfig;
use crate::context::{AppContext, Notice, Screen};
use crate::store::provide_menu_store;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let (screen, set_screen) = signal(Screen::Home);
    let (notice, set_notice) = signal(None::<Notice>);

    // Provide context to all children
    provide_context(AppContext::new((screen, set_screen), (notice, set_notice)));
    provide_context(config);
    provide_menu_store();

    view! {
        <div class="mobile-app-container">
            <NoticeBanner />

            // Main content area
            <div class="mobile-content">
                {move || match screen.get() {
                    Screen::Home => view! {
                        <Header />
                        <CatalogView />
                    }.into_any(),
                    Screen::AddDish => view! { <AddDishForm /> }.into_any(),
                    Screen::Selection => view! { <SelectionList /> }.into_any(),
                }}
            </div>

            <BottomNav />
        </div>
    }
}
