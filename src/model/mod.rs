mod collection;
mod config;
mod document;
mod session;

pub use self::collection::{CollectionView, SortField, SortOrder};
pub use self::config::ClientConfig;
pub use self::document::{Document, DocumentId, DocumentPayload};
pub use self::session::{Session, User};
