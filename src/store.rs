//! Shell State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The shell is
//! the only writer; children get read-only views and emit events.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::BulkDeleteReport;
use crate::error::ApiError;
use crate::models::{unique_by_id, Item};
use crate::reload::{FetchTicket, ReloadState};
use crate::selection::Selection;

/// Transient message shown above the grid
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub text: String,
}

/// Top-level UI state owned by the app shell
#[derive(Clone, Debug, Default, Store)]
pub struct ShellState {
    /// Items currently displayed, one per id
    pub items: Vec<Item>,
    pub selection: Selection,
    pub reload: ReloadState,
    pub notice: Option<Notice>,
    /// A bulk delete is in flight; selection is frozen until it finishes
    pub deleting: bool,
    /// Source of notice ids
    pub notice_seq: u64,
}

impl ShellState {
    fn post_notice(&mut self, text: String) -> u64 {
        self.notice_seq += 1;
        self.notice = Some(Notice { id: self.notice_seq, text });
        self.notice_seq
    }

    /// Apply a finished fetch. Failures still settle the generation so the
    /// collection is not left stale forever. Returns false if discarded.
    pub fn apply_fetch(&mut self, ticket: FetchTicket, outcome: Result<Vec<Item>, ApiError>) -> bool {
        if !self.reload.settle(ticket) {
            return false;
        }
        match outcome {
            Ok(items) => {
                self.items = unique_by_id(items);
                let known: Vec<u32> = self.items.iter().map(|item| item.id).collect();
                self.selection.retain_known(known);
            }
            Err(e) => {
                self.post_notice(format!("Could not load listings: {}", e));
            }
        }
        true
    }

    pub fn toggle_select_mode(&mut self) {
        if self.deleting {
            return;
        }
        self.selection.toggle_mode();
        self.reload.request();
    }

    pub fn set_checked(&mut self, id: u32, checked: bool) {
        if self.deleting {
            return;
        }
        self.selection.set_checked(id, checked);
    }

    /// Claim the checked ids for deletion. None when nothing is checked or
    /// a delete is already running.
    pub fn begin_bulk_delete(&mut self) -> Option<Vec<u32>> {
        if self.deleting || !self.selection.is_active() || self.selection.is_empty() {
            return None;
        }
        self.deleting = true;
        Some(self.selection.checked_ids())
    }

    /// Selection reset and reload happen whatever the individual outcomes
    pub fn finish_bulk_delete(&mut self, report: &BulkDeleteReport) {
        self.deleting = false;
        self.selection.take_for_delete();
        self.reload.request();
        if let Some(summary) = report.failure_summary() {
            self.post_notice(summary);
        }
    }

    pub fn listing_completed(&mut self) {
        self.reload.request();
    }

    /// Clear the notice, but only if it is still the one with `id`
    pub fn dismiss_notice(&mut self, id: u64) {
        if self.notice.as_ref().is_some_and(|n| n.id == id) {
            self.notice = None;
        }
    }
}

/// Type alias for the store
pub type ShellStore = Store<ShellState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_apply_fetch(store: &ShellStore, ticket: FetchTicket, outcome: Result<Vec<Item>, ApiError>) {
    let applied = store.try_update(|state| state.apply_fetch(ticket, outcome)).unwrap_or(false);
    if !applied {
        log::debug!("[FETCH] Discarded stale response for generation {}", ticket.generation());
    }
}

pub fn store_toggle_select_mode(store: &ShellStore) {
    store.update(ShellState::toggle_select_mode);
}

pub fn store_set_checked(store: &ShellStore, id: u32, checked: bool) {
    store.update(|state| state.set_checked(id, checked));
}

pub fn store_begin_bulk_delete(store: &ShellStore) -> Option<Vec<u32>> {
    store.try_update(ShellState::begin_bulk_delete).flatten()
}

pub fn store_finish_bulk_delete(store: &ShellStore, report: &BulkDeleteReport) {
    store.update(|state| state.finish_bulk_delete(report));
}

pub fn store_listing_completed(store: &ShellStore) {
    store.update(ShellState::listing_completed);
}

pub fn store_dismiss_notice(store: &ShellStore, id: u64) {
    store.update(|state| state.dismiss_notice(id));
}
