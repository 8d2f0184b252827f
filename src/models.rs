//! Frontend Models
//!
//! Data structures matching backend entities.

use std::collections::HashSet;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

use crate::config::{AppConfig, Resource};
use crate::error::ApiError;

/// Characters escaped inside a single URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Listing item (matches backend). Draft-only fields are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub image: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub delivery: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl Item {
    /// Absolute URL of this item's image
    pub fn image_url(&self, config: &AppConfig) -> String {
        let name = utf8_percent_encode(&self.image, PATH_SEGMENT);
        config.url(&format!("{}/{}", config.resource.image_route(), name))
    }

    /// Completeness of each displayed field, in display order
    pub fn completeness(&self) -> [(Field, Indicator); 5] {
        [
            (Field::Image, Indicator::from_text(Some(&self.image))),
            (Field::Info, Indicator::from_text(Some(&self.category))),
            (Field::Description, Indicator::from_text(self.description.as_deref())),
            (Field::Shipping, Indicator::from_text(self.delivery.as_deref())),
            (Field::Price, Indicator::from_number(self.price)),
        ]
    }
}

/// Draft fields tracked by the progress bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Image,
    Info,
    Description,
    Shipping,
    Price,
}

impl Field {
    pub fn title(self) -> &'static str {
        match self {
            Field::Image => "Image",
            Field::Info => "Info",
            Field::Description => "Description",
            Field::Shipping => "Shipping",
            Field::Price => "Price",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    On,
    Off,
}

impl Indicator {
    fn from_text(value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => Indicator::On,
            _ => Indicator::Off,
        }
    }

    fn from_number(value: Option<f64>) -> Self {
        match value {
            Some(v) if v != 0.0 && !v.is_nan() => Indicator::On,
            _ => Indicator::Off,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Indicator::On => "IndicatorOn",
            Indicator::Off => "IndicatorOff",
        }
    }
}

/// Parse a list response body, pulling the item array out of its envelope
pub fn parse_listing(resource: Resource, body: &str) -> Result<Vec<Item>, ApiError> {
    let mut envelope: serde_json::Value = serde_json::from_str(body)?;
    let key = resource.envelope_key();
    let items = envelope
        .get_mut(key)
        .map(serde_json::Value::take)
        .ok_or(ApiError::MissingKey(key))?;
    Ok(serde_json::from_value(items)?)
}

/// One grid entry per id; later duplicates of an id are dropped
pub fn unique_by_id(items: Vec<Item>) -> Vec<Item> {
    let mut seen = HashSet::with_capacity(items.len());
    items.into_iter().filter(|item| seen.insert(item.id)).collect()
}

/// Fixed values the backend requires for fields the form does not ask for
pub const PLACEHOLDER_FIELDS: &[(&str, &str)] = &[
    ("item_state_id", "0"),
    ("delivery_id", "0"),
    ("price", "0"),
    ("description", "test"),
];

/// Listing form contents, minus the file handle itself
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingDraft {
    pub name: String,
    pub category: String,
    /// File name of the selected image, if any
    pub image_name: Option<String>,
}

impl ListingDraft {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::Validation("Name is required".into()));
        }
        if self.category.trim().is_empty() {
            return Err(ApiError::Validation("Category is required".into()));
        }
        match &self.image_name {
            None => Err(ApiError::Validation("Image is required".into())),
            Some(name) if !name.to_ascii_lowercase().ends_with(".jpg") => {
                Err(ApiError::Validation("Image must be a .jpg file".into()))
            }
            Some(_) => Ok(()),
        }
    }

    /// Text parts of the multipart body, in submission order.
    /// The image part is appended separately.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("item_name", self.name.clone()),
            ("category", self.category.clone()),
        ];
        fields.extend(PLACEHOLDER_FIELDS.iter().map(|(k, v)| (*k, v.to_string())));
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32) -> Item {
        Item {
            id,
            name: format!("Item {}", id),
            category: "Misc".to_string(),
            image: format!("{}.jpg", id),
            description: None,
            delivery: None,
            price: None,
        }
    }

    #[test]
    fn completeness_marks_empty_and_zero_fields_off() {
        let item = Item {
            image: String::new(),
            category: "Chairs".to_string(),
            description: Some(String::new()),
            delivery: Some("UPS".to_string()),
            price: Some(10.0),
            ..make_item(1)
        };

        let marks: Vec<_> = item.completeness().iter().map(|(f, i)| (f.title(), *i)).collect();
        assert_eq!(
            marks,
            vec![
                ("Image", Indicator::Off),
                ("Info", Indicator::On),
                ("Description", Indicator::Off),
                ("Shipping", Indicator::On),
                ("Price", Indicator::On),
            ]
        );
    }

    #[test]
    fn completeness_treats_missing_and_zero_price_as_off() {
        let mut item = make_item(1);
        assert_eq!(item.completeness()[4].1, Indicator::Off);
        item.price = Some(0.0);
        assert_eq!(item.completeness()[4].1, Indicator::Off);
        assert_eq!(Indicator::Off.class(), "IndicatorOff");
        assert_eq!(Indicator::On.class(), "IndicatorOn");
    }

    #[test]
    fn parse_draft_envelope() {
        let body = r#"{"draft items": [
            {"id": 1, "name": "Chair", "category": "Furniture", "image": "a.jpg",
             "description": "", "delivery": "UPS", "price": 10},
            {"id": 2, "name": "Lamp", "category": "", "image": ""}
        ]}"#;

        let items = parse_listing(Resource::Drafts, body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].price, Some(10.0));
        assert_eq!(items[0].delivery.as_deref(), Some("UPS"));
        assert_eq!(items[1].description, None);
    }

    #[test]
    fn parse_reports_missing_key_and_bad_shape() {
        let err = parse_listing(Resource::Drafts, r#"{"items": []}"#).unwrap_err();
        assert_eq!(err, ApiError::MissingKey("draft items"));

        let err = parse_listing(Resource::Items, r#"{"items": [{"id": "x"}]}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));

        let err = parse_listing(Resource::Items, "not json").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn unique_by_id_keeps_one_entry_per_item() {
        let items = vec![make_item(3), make_item(1), make_item(3), make_item(2)];
        let ids: Vec<u32> = unique_by_id(items).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);

        let distinct: Vec<Item> = (1..=50).map(make_item).collect();
        assert_eq!(unique_by_id(distinct.clone()), distinct);
    }

    #[test]
    fn image_url_encodes_file_name() {
        let config = AppConfig::from_values(Some("http://host:9000"), Some("drafts"));
        let item = Item { image: "my photo.jpg".to_string(), ..make_item(1) };
        assert_eq!(item.image_url(&config), "http://host:9000/draft_image/my%20photo.jpg");
    }

    #[test]
    fn listing_fields_include_placeholders() {
        let draft = ListingDraft {
            name: "Chair".to_string(),
            category: "Furniture".to_string(),
            image_name: Some("chair.jpg".to_string()),
        };
        assert!(draft.validate().is_ok());

        let fields = draft.text_fields();
        assert_eq!(
            fields,
            vec![
                ("item_name", "Chair".to_string()),
                ("category", "Furniture".to_string()),
                ("item_state_id", "0".to_string()),
                ("delivery_id", "0".to_string()),
                ("price", "0".to_string()),
                ("description", "test".to_string()),
            ]
        );
    }

    #[test]
    fn listing_validation() {
        let mut draft = ListingDraft::default();
        assert!(matches!(draft.validate(), Err(ApiError::Validation(_))));

        draft.name = "Chair".into();
        draft.category = "Furniture".into();
        assert_eq!(draft.validate(), Err(ApiError::Validation("Image is required".into())));

        draft.image_name = Some("chair.png".into());
        assert_eq!(draft.validate(), Err(ApiError::Validation("Image must be a .jpg file".into())));

        draft.image_name = Some("CHAIR.JPG".into());
        assert!(draft.validate().is_ok());
    }
}
