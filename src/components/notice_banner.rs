//! Notice Banner Component
//!
//! Dismissable message for failed loads and partial bulk deletes.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::Notice;

const AUTO_DISMISS_MS: u32 = 6_000;

#[component]
pub fn NoticeBanner(
    #[prop(into)] notice: Signal<Option<Notice>>,
    #[prop(into)] on_dismiss: Callback<u64>,
) -> impl IntoView {
    // Runs once per notice, not on every store write
    let notice_id = Memo::new(move |_| notice.with(|n| n.as_ref().map(|n| n.id)));

    // Each notice clears itself unless a newer one replaced it first
    Effect::new(move |_| {
        if let Some(id) = notice_id.get() {
            spawn_local(async move {
                TimeoutFuture::new(AUTO_DISMISS_MS).await;
                on_dismiss.run(id);
            });
        }
    });

    move || {
        notice.get().map(|Notice { id, text }| view! {
            <div class="notice" role="alert">
                <span class="notice-text">{text}</span>
                <button class="notice-dismiss" on:click=move |_| on_dismiss.run(id)>"×"</button>
            </div>
        })
    }
}
