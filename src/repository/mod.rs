//! Item repository: the only code that talks SQL to the `items` table.

mod items;
mod validation;
pub use items::{ItemRepository, RepoResult, SqliteItemRepository};
pub use validation::RequestValidator;
