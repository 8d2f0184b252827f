//! Item Card Component
//!
//! One listing in the grid: checkbox, image, name/category, progress bar.

use leptos::prelude::*;

use crate::config::app_config;
use crate::models::Item;
use crate::selection::Selection;

#[component]
pub fn ItemCard(
    item: Item,
    selection: Signal<Selection>,
    deleting: Signal<bool>,
    on_check: Callback<(u32, bool)>,
) -> impl IntoView {
    let id = item.id;
    let image_src = item.image_url(app_config());
    let completeness = item.completeness();

    // Hidden, not unmounted, outside Select mode
    let checkbox_style = move || {
        if selection.with(Selection::is_active) {
            "display: block;"
        } else {
            "display: none;"
        }
    };

    view! {
        <div class="ItemList">
            <div class="ItemInfo">
                <input
                    class="Selector"
                    id=id.to_string()
                    name=item.name.clone()
                    type="checkbox"
                    style=checkbox_style
                    disabled=move || deleting.get()
                    prop:checked=move || selection.with(|s| s.is_checked(id))
                    on:change=move |ev| on_check.run((id, event_target_checked(&ev)))
                />
                <img src=image_src alt=item.name.clone() />
                <p>
                    <span>"Name: " {item.name.clone()}</span>
                    <br />
                    <span>"Category: " {item.category.clone()}</span>
                </p>
            </div>
            <div class="ProgressBar">
                <div class="TitleRow">
                    {completeness.iter().map(|(field, _)| view! {
                        <div class="ProgressTitle">{field.title()}</div>
                    }).collect_view()}
                </div>
                <div class="IndicatorRow">
                    {completeness.iter().map(|(_, indicator)| view! {
                        <div class=indicator.class()></div>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
