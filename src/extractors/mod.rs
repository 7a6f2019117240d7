//! Request extractors for the item endpoints.

pub mod item_body;
pub use item_body::ItemBody;
