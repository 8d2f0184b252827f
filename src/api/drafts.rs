//! Draft Commands
//!
//! Create and delete draft listings.

use std::future::Future;

use futures_util::future::join_all;
use gloo_net::http::Request;
use web_sys::{File, FormData};

use super::ensure_ok;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::ListingDraft;

const DRAFTS_PATH: &str = "/drafts";

fn build_form(draft: &ListingDraft, image: &File) -> Result<FormData, ApiError> {
    let body_err = |e: wasm_bindgen::JsValue| ApiError::Body(format!("{:?}", e));

    let form = FormData::new().map_err(body_err)?;
    let mut fields = draft.text_fields().into_iter();
    // item_name, category, image, then the placeholders
    for (name, value) in fields.by_ref().take(2) {
        form.append_with_str(name, &value).map_err(body_err)?;
    }
    form.append_with_blob_and_filename("image", image, &image.name())
        .map_err(body_err)?;
    for (name, value) in fields {
        form.append_with_str(name, &value).map_err(body_err)?;
    }
    Ok(form)
}

/// POST a new draft as multipart form data
pub async fn create_draft(config: &AppConfig, draft: &ListingDraft, image: &File) -> Result<(), ApiError> {
    draft.validate()?;
    let form = build_form(draft, image)?;

    let response = Request::post(&config.url(DRAFTS_PATH))
        .body(form)
        .map_err(|e| ApiError::Body(e.to_string()))?
        .send()
        .await?;
    let response = ensure_ok(response)?;
    log::info!("[FORM] POST status: {} {}", response.status(), response.status_text());
    Ok(())
}

pub async fn delete_draft(config: &AppConfig, id: u32) -> Result<(), ApiError> {
    let url = config.url(&format!("{}/{}", DRAFTS_PATH, id));
    let response = Request::delete(&url).send().await?;
    ensure_ok(response)?;
    Ok(())
}

/// Outcome of deleting several drafts one request at a time
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BulkDeleteReport {
    pub deleted: Vec<u32>,
    pub failed: Vec<(u32, ApiError)>,
}

impl BulkDeleteReport {
    pub fn attempted(&self) -> usize {
        self.deleted.len() + self.failed.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// User-facing summary, only when something failed
    pub fn failure_summary(&self) -> Option<String> {
        if self.is_complete() {
            return None;
        }
        let failed_ids: Vec<String> = self.failed.iter().map(|(id, _)| format!("#{}", id)).collect();
        Some(format!(
            "Deleted {} of {} drafts; failed: {}",
            self.deleted.len(),
            self.attempted(),
            failed_ids.join(", ")
        ))
    }
}

/// Run `delete_one` once per id, all at once, and collect the outcomes.
/// No ordering between the requests is implied.
pub async fn delete_each<F, Fut>(ids: &[u32], delete_one: F) -> BulkDeleteReport
where
    F: Fn(u32) -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    let outcomes = join_all(ids.iter().map(|&id| {
        let request = delete_one(id);
        async move { (id, request.await) }
    }))
    .await;

    let mut report = BulkDeleteReport::default();
    for (id, outcome) in outcomes {
        match outcome {
            Ok(()) => report.deleted.push(id),
            Err(e) => report.failed.push((id, e)),
        }
    }
    report
}

/// DELETE every id in `ids` against the drafts endpoint
pub async fn delete_drafts(config: &AppConfig, ids: &[u32]) -> BulkDeleteReport {
    let report = delete_each(ids, |id| delete_draft(config, id)).await;
    for (id, e) in &report.failed {
        log::warn!("[DELETE] Draft {} failed: {}", id, e);
    }
    report
}
