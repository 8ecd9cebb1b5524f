//! Notice Banner Component
//!
//! Shows the current success or validation notice and hides it after a delay.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::config::AppConfig;
use crate::context::{AppContext, NoticeKind};

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let config = use_context::<AppConfig>().expect("AppConfig should be provided");
    let timeout_ms = config.notice_timeout_ms;

    // Auto-dismiss, unless a newer notice replaced this one in the meantime
    Effect::new(move |_| {
        if let Some(seq) = ctx.notice.with(|n| n.as_ref().map(|n| n.seq)) {
            Timeout::new(timeout_ms, move || ctx.dismiss_notice_if_current(seq)).forget();
        }
    });

    view! {
        {move || ctx.notice.get().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Success => "notice-banner success",
                NoticeKind::Error => "notice-banner error",
            };
            view! {
                <div class=class role="alert">
                    <strong class="notice-title">{notice.title}</strong>
                    <span class="notice-message">{notice.message}</span>
                    <button class="notice-ok" on:click=move |_| ctx.dismiss_notice()>"OK"</button>
                </div>
            }
        })}
    }
}
