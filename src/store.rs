//! Menu Selection Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Any view, memo or
//! effect that reads the selection re-runs when it changes.

use leptos::prelude::*;
use reactive_stores::Store;

use menu_domain::{total_price, DishDraft, MenuItem, ValidationResult};

/// The user's current selection, in the order dishes were added
#[derive(Clone, Debug, Default, Store)]
pub struct MenuState {
    /// Selected dishes; duplicates are separate entries
    pub selected_items: Vec<MenuItem>,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type MenuStore = Store<MenuState>;

/// Create an empty store and provide it to all children
pub fn provide_menu_store() -> MenuStore {
    let store = Store::new(MenuState::new());
    provide_context(store);
    store
}

/// Get the menu store from context
pub fn use_menu_store() -> MenuStore {
    expect_context::<MenuStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a dish to the selection. The dish must already be valid.
pub fn store_add_item(store: &MenuStore, item: MenuItem) {
    log::debug!("[STORE] add {:?} ({})", item.name, item.course);
    store.selected_items().write().push(item);
}

/// Number of selected dishes
pub fn store_total_items(store: &MenuStore) -> usize {
    store.selected_items().with(|items| items.len())
}

/// Snapshot of the selection in add order
pub fn store_selected_items(store: &MenuStore) -> Vec<MenuItem> {
    store.selected_items().get()
}

/// Sum of selected prices
pub fn store_total_price(store: &MenuStore) -> u64 {
    store.selected_items().with(|items| total_price(items))
}

/// Remove the dish at `index`; later dishes shift down and keep their order.
/// Out-of-range indexes leave the store untouched.
pub fn store_remove_item(store: &MenuStore, index: usize) -> Option<MenuItem> {
    if index >= store.selected_items().with_untracked(|items| items.len()) {
        log::warn!("[STORE] remove index {} out of range", index);
        return None;
    }
    let removed = store.selected_items().write().remove(index);
    log::debug!("[STORE] removed {:?} at {}", removed.name, index);
    Some(removed)
}

/// Validate the draft and, only if it is valid, add the dish and reset the draft.
/// On error neither the store nor the draft changes.
pub fn submit_dish(store: &MenuStore, draft: &mut DishDraft) -> ValidationResult<MenuItem> {
    let item = draft.build()?;
    store_add_item(store, item.clone());
    draft.reset();
    Ok(item)
}
