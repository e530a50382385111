pub mod models;

pub use models::{RawReply, SearchReply, SearchRequest};

/// Path of the backend's search endpoint, relative to the base URL.
pub const SEARCH_PATH: &str = "/search";
