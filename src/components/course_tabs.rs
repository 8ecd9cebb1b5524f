//! Course Tabs Component
//!
//! Tab bar for filtering the catalog by course.

use leptos::prelude::*;

use menu_domain::CourseFilter;

/// Course filter tabs (All, Breakfast, Mains, Desserts)
#[component]
pub fn CourseTabs(
    active: ReadSignal<CourseFilter>,
    set_active: WriteSignal<CourseFilter>,
) -> impl IntoView {
    view! {
        <div class="course-tabs">
            {CourseFilter::TABS.iter().map(|tab| {
                let tab = *tab;
                let tab_class = move || {
                    if active.get() == tab { "course-tab active" } else { "course-tab" }
                };
                view! {
                    <button class=tab_class on:click=move |_| set_active.set(tab)>
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
