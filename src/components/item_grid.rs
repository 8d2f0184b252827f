//! Item Grid Component
//!
//! Renders the shell's item collection, one card per id.

use leptos::prelude::*;

use crate::components::ItemCard;
use crate::models::Item;
use crate::selection::Selection;

#[component]
pub fn ItemGrid(
    #[prop(into)] items: Signal<Vec<Item>>,
    #[prop(into)] selection: Signal<Selection>,
    #[prop(into)] deleting: Signal<bool>,
    #[prop(into)] on_check: Callback<(u32, bool)>,
) -> impl IntoView {
    view! {
        <div class="ItemGrid">
            <Show when=move || items.with(Vec::is_empty)>
                <p class="empty-grid">"No listings yet"</p>
            </Show>
            <For
                each=move || items.get()
                key=|item| item.id
                children=move |item| view! {
                    <ItemCard item=item selection=selection deleting=deleting on_check=on_check />
                }
            />
        </div>
    }
}
