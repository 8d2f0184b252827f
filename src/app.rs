//! Drafts Frontend App
//!
//! The app shell: owns all shared state and wires component events to it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{ItemGrid, ListingForm, NoticeBanner, Toolbar};
use crate::config::app_config;
use crate::reload::ReloadState;
use crate::store::{
    store_apply_fetch, store_begin_bulk_delete, store_dismiss_notice, store_finish_bulk_delete,
    store_listing_completed, store_set_checked, store_toggle_select_mode, ShellState,
    ShellStateStoreFields,
};

#[component]
pub fn App() -> impl IntoView {
    let config = app_config();
    let store = Store::new(ShellState::default());

    // Only a new generation starts a fetch; settling one does not
    let requested = Memo::new(move |_| store.reload().with(ReloadState::requested));

    // Load items whenever a reload is requested
    Effect::new(move |_| {
        let generation = requested.get();
        let ticket = store.reload().with_untracked(ReloadState::begin);
        log::info!("[APP] Loading listings, generation={}", generation);
        spawn_local(async move {
            let outcome = api::list_items(config).await;
            match &outcome {
                Ok(items) => log::info!("[APP] Loaded {} items", items.len()),
                Err(e) => log::error!("[FETCH] GET error: {}", e),
            }
            store_apply_fetch(&store, ticket, outcome);
        });
    });

    // Read-only views for children
    let items = Signal::derive(move || store.items().get());
    let selection = Signal::derive(move || store.selection().get());
    let notice = Memo::new(move |_| store.notice().get());
    let deleting = Memo::new(move |_| store.deleting().get());
    let loading = Memo::new(move |_| store.reload().with(ReloadState::is_stale));

    let on_check = Callback::new(move |(id, checked): (u32, bool)| {
        store_set_checked(&store, id, checked);
    });

    let on_toggle = Callback::new(move |_: ()| store_toggle_select_mode(&store));

    let on_delete = Callback::new(move |_: ()| {
        let Some(ids) = store_begin_bulk_delete(&store) else {
            log::debug!("[DELETE] Nothing to delete or already deleting");
            return;
        };
        log::info!("[DELETE] Deleting {} drafts", ids.len());
        spawn_local(async move {
            let report = api::delete_drafts(config, &ids).await;
            log::info!("[DELETE] {} of {} deleted", report.deleted.len(), report.attempted());
            store_finish_bulk_delete(&store, &report);
        });
    });

    let on_listing_completed = Callback::new(move |_: ()| store_listing_completed(&store));

    let on_dismiss = Callback::new(move |id: u64| store_dismiss_notice(&store, id));

    view! {
        <div class="app-layout">
            <Toolbar
                title=config.resource.title()
                selection=selection
                deleting=deleting
                on_toggle=on_toggle
                on_delete=on_delete
            />

            <NoticeBanner notice=notice on_dismiss=on_dismiss />

            <ListingForm on_listing_completed=on_listing_completed />

            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <ItemGrid items=items selection=selection deleting=deleting on_check=on_check />

            <p class="item-count">{move || format!("{} items", items.with(Vec::len))}</p>
        </div>
    }
}
