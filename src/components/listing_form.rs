//! Listing Form Component
//!
//! Form for creating a new draft: name, category and a jpg image.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::config::app_config;
use crate::models::ListingDraft;

/// Form for creating new draft listings
///
/// `on_listing_completed` fires once per successful POST.
#[component]
pub fn ListingForm(#[prop(into)] on_listing_completed: Callback<()>) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (image_name, set_image_name) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let file_input: NodeRef<html::Input> = NodeRef::new();

    let selected_file = move || {
        file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
    };

    let on_file_change = move |_| {
        set_image_name.set(selected_file().map(|file| file.name()));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let draft = ListingDraft {
            name: name.get_untracked(),
            category: category.get_untracked(),
            image_name: image_name.get_untracked(),
        };
        if let Err(e) = draft.validate() {
            set_error.set(Some(e.to_string()));
            return;
        }
        let Some(file) = selected_file() else {
            set_error.set(Some("Image is required".to_string()));
            return;
        };

        set_error.set(None);
        set_submitting.set(true);
        spawn_local(async move {
            match api::create_draft(app_config(), &draft, &file).await {
                Ok(()) => {
                    set_name.set(String::new());
                    set_category.set(String::new());
                    set_image_name.set(None);
                    if let Some(input) = file_input.get_untracked() {
                        input.set_value("");
                    }
                    on_listing_completed.run(());
                }
                Err(e) => {
                    log::error!("[FORM] POST error: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="Listing">
            <form on:submit=on_submit>
                <div>
                    <input
                        type="text"
                        name="name"
                        id="name"
                        placeholder="name"
                        required=true
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <input
                        type="text"
                        name="category"
                        id="category"
                        placeholder="category"
                        required=true
                        prop:value=move || category.get()
                        on:input=move |ev| set_category.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <input
                        type="file"
                        name="image"
                        id="image"
                        accept=".jpg,image/jpeg"
                        required=true
                        node_ref=file_input
                        on:change=on_file_change
                    />
                </div>
                <div>
                    <button type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Listing..." } else { "List this item" }}
                    </button>
                </div>
                {move || error.get().map(|message| view! {
                    <p class="form-error">{message}</p>
                })}
            </form>
        </div>
    }
}
