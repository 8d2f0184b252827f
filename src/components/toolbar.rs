//! Toolbar Component
//!
//! Title, Select/Done toggle, and the delete control shown in Select mode.

use leptos::prelude::*;

use crate::selection::{SelectMode, Selection};

/// Blocking browser confirmation; false when no window is available
fn confirm_delete(count: usize) -> bool {
    let message = if count == 1 {
        "Delete the selected draft?".to_string()
    } else {
        format!("Delete {} selected drafts?", count)
    };
    web_sys::window()
        .and_then(|w| w.confirm_with_message(&message).ok())
        .unwrap_or(false)
}

/// Toolbar bound to the shell's selection
///
/// # Arguments
/// * `deleting` - True while a bulk delete is pending
/// * `on_toggle` - Fired when the Select/Done button is pressed
/// * `on_delete` - Fired only after the user confirms deleting a non-empty selection
#[component]
pub fn Toolbar(
    title: &'static str,
    #[prop(into)] selection: Signal<Selection>,
    #[prop(into)] deleting: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
    #[prop(into)] on_delete: Callback<()>,
) -> impl IntoView {
    let count = move || selection.with(Selection::len);

    let delete = move |_| {
        let count = selection.with_untracked(Selection::len);
        if count == 0 || deleting.get_untracked() {
            return;
        }
        if confirm_delete(count) {
            on_delete.run(());
        } else {
            log::debug!("[DELETE] Cancelled by user");
        }
    };

    let toolbar_class = move || match selection.with(Selection::mode) {
        SelectMode::Browse => "ToolBar",
        SelectMode::Select => "ToolBar selecting",
    };

    view! {
        <header class=toolbar_class>
            <div class="TBarItem">
                <Show when=move || selection.with(Selection::is_active)>
                    <button
                        class="delete-btn"
                        name="DeleteButton"
                        disabled=move || count() == 0 || deleting.get()
                        on:click=delete
                    >
                        {move || {
                            if deleting.get() {
                                "Deleting...".to_string()
                            } else {
                                format!("Delete ({})", count())
                            }
                        }}
                    </button>
                </Show>
            </div>
            <div class="Title">
                <p><b>{title}</b></p>
            </div>
            <div class="TBarItem">
                <button
                    name="SelectButton"
                    disabled=move || deleting.get()
                    on:click=move |_| on_toggle.run(())
                >
                    {move || selection.with(Selection::toggle_label)}
                </button>
            </div>
        </header>
    }
}
