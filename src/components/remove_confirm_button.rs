//! Remove Confirm Button Component
//!
//! Inline remove button that asks for confirmation first.

use leptos::prelude::*;

/// Inline remove confirmation button
///
/// Shows a × button initially. When clicked, shows "Remove?" with ✓/✗ buttons.
///
/// # Arguments
/// * `on_confirm` - Callback to execute when user confirms removal
#[component]
pub fn RemoveConfirmButton(
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show when=move || !confirming.get()>
            <button class="remove-btn" on:click=move |_| set_confirming.set(true)>
                "×"
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="remove-confirm">
                <span class="remove-confirm-text">"Remove?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |_| {
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button class="cancel-btn" on:click=move |_| set_confirming.set(false)>
                    "✗"
                </button>
            </span>
        </Show>
    }
}
