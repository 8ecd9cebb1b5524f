//! Course Selector Component
//!
//! Course buttons for the add-dish form.

use leptos::prelude::*;

use menu_domain::Course;

/// Course selector buttons; exactly one is active
#[component]
pub fn CourseSelector(
    #[prop(into)] current: Signal<Course>,
    on_change: impl Fn(Course) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="course-selector">
            {Course::ALL.iter().map(|course| {
                let course = *course;
                let is_selected = move || current.get() == course;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "course-btn active" } else { "course-btn" }
                        on:click=move |_| on_change(course)
                    >
                        {course.as_str()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
