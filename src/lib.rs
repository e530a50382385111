pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod input;
pub mod transport;
pub mod ui;

pub use client::{SearchClient, SubmitOutcome};
pub use error::SearchError;
pub use transport::{HttpTransport, SearchTransport};
pub use ui::{MemoryUi, ProfileLink, TerminalUi, UiPort};
