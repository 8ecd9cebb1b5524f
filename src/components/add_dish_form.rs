//! Add Dish Form Component
//!
//! Form for creating a new dish and adding it to the selection.

use leptos::prelude::*;

use menu_domain::DishDraft;

use crate::components::CourseSelector;
use crate::config::AppConfig;
use crate::context::{AppContext, Notice, Screen};
use crate::store::{submit_dish, use_menu_store};

/// Create-dish form; submit stays disabled until every field is filled in
#[component]
pub fn AddDishForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let config = use_context::<AppConfig>().expect("AppConfig should be provided");
    let store = use_menu_store();

    let draft = RwSignal::new(DishDraft::new());
    let can_submit = move || draft.with(|d| d.is_submittable());

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut current = draft.get_untracked();
        match submit_dish(&store, &mut current) {
            Ok(item) => {
                log::info!("[FORM] added {:?}", item.name);
                ctx.notify(Notice::dish_added(&item.name));
                draft.set(current);
            }
            Err(e) => {
                log::info!("[FORM] rejected: {}", e.title());
                ctx.notify(Notice::from(e));
            }
        }
    };

    view! {
        <form class="dish-form" on:submit=save>
            <h2 class="dish-form-title">"Create New Dish"</h2>

            <label class="dish-form-group">
                <span class="dish-form-label">"Dish Name"</span>
                <input
                    type="text"
                    placeholder="Enter dish name"
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.name = value);
                    }
                />
            </label>

            <label class="dish-form-group">
                <span class="dish-form-label">"Description"</span>
                <textarea
                    rows="3"
                    placeholder="Describe your dish..."
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.description = value);
                    }
                />
            </label>

            <div class="dish-form-group">
                <span class="dish-form-label">"Course"</span>
                <CourseSelector
                    current=Signal::derive(move || draft.with(|d| d.course))
                    on_change=move |course| draft.update(|d| d.course = course)
                />
            </div>

            <label class="dish-form-group">
                <span class="dish-form-label">{format!("Price ({})", config.currency)}</span>
                <input
                    type="text"
                    inputmode="decimal"
                    placeholder="0"
                    prop:value=move || draft.with(|d| d.price_text.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.price_text = value);
                    }
                />
            </label>

            <div class="dish-form-actions">
                <button type="button" class="cancel-btn" on:click=move |_| ctx.navigate(Screen::Home)>
                    "Cancel"
                </button>
                <button
                    type="submit"
                    class=move || if can_submit() { "save-btn" } else { "save-btn disabled" }
                    disabled=move || !can_submit()
                >
                    "Add to Menu"
                </button>
            </div>
        </form>
    }
}
