//! Build-time Configuration
//!
//! The browser has no process environment, so values are captured at
//! compile time (`API_URL=... trunk build`).

use std::sync::OnceLock;

/// Backend used when `API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:9000";

/// Which listing collection the grid shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Items,
    Drafts,
}

impl Resource {
    /// Path of the list endpoint
    pub fn list_path(self) -> &'static str {
        match self {
            Resource::Items => "/items",
            Resource::Drafts => "/drafts",
        }
    }

    /// Key holding the item array in the list response
    pub fn envelope_key(self) -> &'static str {
        match self {
            Resource::Items => "items",
            Resource::Drafts => "draft items",
        }
    }

    /// Route serving image assets for this collection
    pub fn image_route(self) -> &'static str {
        match self {
            Resource::Items => "/image",
            Resource::Drafts => "/draft_image",
        }
    }

    /// Heading shown in the toolbar
    pub fn title(self) -> &'static str {
        match self {
            Resource::Items => "All Items",
            Resource::Drafts => "All Drafts",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "items" => Some(Resource::Items),
            "drafts" => Some(Resource::Drafts),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
    pub resource: Resource,
}

impl AppConfig {
    pub fn from_values(api_url: Option<&str>, resource: Option<&str>) -> Self {
        let api_base = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        let resource = match resource {
            Some(raw) => Resource::parse(raw).unwrap_or_else(|| {
                log::warn!("[CONFIG] Unknown LISTING_RESOURCE {:?}, using drafts", raw);
                Resource::Drafts
            }),
            None => Resource::Drafts,
        };

        Self { api_base, resource }
    }

    /// Absolute URL for an API path (`path` starts with `/`)
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Configuration resolved once from the build environment
pub fn app_config() -> &'static AppConfig {
    APP_CONFIG.get_or_init(|| {
        AppConfig::from_values(option_env!("API_URL"), option_env!("LISTING_RESOURCE"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_loopback_drafts() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config.api_base, "http://127.0.0.1:9000");
        assert_eq!(config.resource, Resource::Drafts);
        assert_eq!(config.url("/drafts"), "http://127.0.0.1:9000/drafts");
    }

    #[test]
    fn trims_trailing_slash_and_blank_values() {
        let config = AppConfig::from_values(Some("https://api.example.com/"), Some("Items"));
        assert_eq!(config.api_base, "https://api.example.com");
        assert_eq!(config.resource, Resource::Items);

        let blank = AppConfig::from_values(Some("   "), Some("bogus"));
        assert_eq!(blank.api_base, DEFAULT_API_URL);
        assert_eq!(blank.resource, Resource::Drafts);
    }

    #[test]
    fn resource_routes() {
        assert_eq!(Resource::Drafts.list_path(), "/drafts");
        assert_eq!(Resource::Drafts.envelope_key(), "draft items");
        assert_eq!(Resource::Drafts.image_route(), "/draft_image");
        assert_eq!(Resource::Items.list_path(), "/items");
        assert_eq!(Resource::Items.envelope_key(), "items");
        assert_eq!(Resource::Items.image_route(), "/image");
        assert_eq!(Resource::Drafts.title(), "All Drafts");
    }
}
