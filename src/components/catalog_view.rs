//! Catalog View Component
//!
//! Course tabs above the filtered list of catalog dishes.

use leptos::prelude::*;

use menu_domain::{catalog, filter_catalog, CourseFilter};

use crate::components::{CourseTabs, DishCard};

#[component]
pub fn CatalogView() -> impl IntoView {
    let (active_tab, set_active_tab) = signal(CourseFilter::All);
    let dishes = catalog();

    let visible = move || filter_catalog(&dishes, active_tab.get());

    view! {
        <CourseTabs active=active_tab set_active=set_active_tab />
        <div class="menu-list">
            <For
                each=visible
                key=|item| item.name.clone()
                children=move |item| view! { <DishCard item=item /> }
            />
        </div>
    }
}
