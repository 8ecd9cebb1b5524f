//! Selection List Component
//!
//! The dishes the user has picked, with per-course counts and totals.

use leptos::prelude::*;

use menu_domain::{average_price, count_by_course, Course, MenuItem};

use crate::components::RemoveConfirmButton;
use crate::config::AppConfig;
use crate::store::{store_remove_item, store_selected_items, store_total_items, store_total_price, use_menu_store};

/// One selected dish; removal is by position in the selection
#[component]
fn SelectedRow(index: usize, item: MenuItem, currency: String) -> impl IntoView {
    let store = use_menu_store();

    view! {
        <div class="selected-row">
            <div class="selected-row-body">
                <span class="selected-row-name">{item.name.clone()}</span>
                <span class="selected-row-course">{item.course.as_str()}</span>
            </div>
            <span class="selected-row-price">{item.price_label(&currency)}</span>
            <RemoveConfirmButton on_confirm=move |_| {
                store_remove_item(&store, index);
            } />
        </div>
    }
}

#[component]
pub fn SelectionList() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig should be provided");
    let store = use_menu_store();
    let currency = StoredValue::new(config.currency);

    let counts = Memo::new(move |_| count_by_course(&store_selected_items(&store)));
    let averages = Memo::new(move |_| {
        let items = store_selected_items(&store);
        Course::ALL.map(|course| average_price(&items, course))
    });

    let rows = move || {
        store_selected_items(&store)
            .into_iter()
            .enumerate()
            .map(|(index, item)| view! { <SelectedRow index=index item=item currency=currency.get_value() /> })
            .collect_view()
    };

    view! {
        <div class="selection">
            <h2 class="selection-title">
                {move || format!("Your Selection ({})", store_total_items(&store))}
            </h2>

            {move || if store_total_items(&store) == 0 {
                view! { <p class="selection-empty">"No dishes selected yet."</p> }.into_any()
            } else {
                view! { <div class="selection-rows">{rows}</div> }.into_any()
            }}

            <ul class="selection-summary">
                {Course::ALL.iter().map(|course| {
                    let course = *course;
                    let line = move || {
                        let count = counts.get().get(course);
                        match averages.get()[course.index()] {
                            Some(avg) => format!("{}: {} (avg {} {})", course, count, avg, currency.get_value()),
                            None => format!("{}: {}", course, count),
                        }
                    };
                    view! { <li class="selection-summary-line">{line}</li> }
                }).collect_view()}
            </ul>

            <p class="selection-total">
                {move || format!("Total: {} {}", store_total_price(&store), currency.get_value())}
            </p>
        </div>
    }
}
