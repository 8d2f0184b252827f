//! UI Components
//!
//! Leptos components composed by the app shell.

mod item_card;
mod item_grid;
mod listing_form;
mod notice_banner;
mod toolbar;

pub use item_card::ItemCard;
pub use item_grid::ItemGrid;
pub use listing_form::ListingForm;
pub use notice_banner::NoticeBanner;
pub use toolbar::Toolbar;
