//! REST API Wrappers
//!
//! Frontend bindings to the listings backend, organized by resource.

mod drafts;
mod items;

use gloo_net::http::Response;

use crate::error::ApiError;

// Re-export all public items
pub use drafts::*;
pub use items::*;

/// Turn a non-2xx response into `ApiError::Status`
fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: response.status(),
            status_text: response.status_text(),
        })
    }
}
