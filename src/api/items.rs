//! Listing Fetch
//!
//! GET the item collection and unwrap it from its JSON envelope.

use gloo_net::http::Request;

use super::ensure_ok;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::{parse_listing, Item};

pub async fn list_items(config: &AppConfig) -> Result<Vec<Item>, ApiError> {
    let url = config.url(config.resource.list_path());

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await?;
    let response = ensure_ok(response)?;

    let body = response.text().await?;
    let items = parse_listing(config.resource, &body)?;
    log::debug!("[FETCH] GET {} returned {} items", url, items.len());
    Ok(items)
}
