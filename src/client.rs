use std::sync::atomic::{AtomicU64, Ordering};

use crate::api::{SearchReply, SearchRequest};
use crate::error::SearchError;
use crate::transport::SearchTransport;
use crate::ui::{ProfileLink, UiPort};

pub const EMPTY_INPUT_PROMPT: &str = "Please enter a username.";
pub const SEARCHING_STATUS: &str = "Searching…";
pub const SEARCH_FAILED_FALLBACK: &str = "Search failed.";
pub const NO_PROFILES_STATUS: &str = "No profiles found.";

/// How a single submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input, nothing was sent.
    Rejected,
    /// Links were rendered.
    Displayed(usize),
    /// Success response without any usable links.
    NoProfiles,
    /// API or transport failure, surfaced in the status slot.
    Failed(SearchError),
    /// A newer submission started before this one settled; the UI was left alone.
    Superseded,
}

/// Runs one search per form submission and paints the result onto a [`UiPort`].
///
/// Every submission takes a fresh generation number. A response is only applied
/// when its generation is still the latest, so overlapping submissions resolve to
/// whatever the user asked for last.
pub struct SearchClient<T, U> {
    transport: T,
    ui: U,
    sites: Vec<String>,
    generation: AtomicU64,
}

impl<T, U> SearchClient<T, U>
where
    T: SearchTransport,
    U: UiPort,
{
    pub fn new(transport: T, ui: U) -> Self {
        SearchClient {
            transport,
            ui,
            sites: Vec::new(),
            generation: AtomicU64::new(0),
        }
    }

    /// Restrict every search to the given site names.
    pub fn with_sites(mut self, sites: Vec<String>) -> Self {
        self.sites = sites;
        self
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub async fn on_submit(&self, raw_input: &str) -> SubmitOutcome {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let request = match SearchRequest::new(raw_input, self.sites.clone()) {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!(generation, "rejected submission: {e}");
                self.ui.set_status(EMPTY_INPUT_PROMPT);
                return SubmitOutcome::Rejected;
            }
        };

        tracing::info!(generation, username = %request.username, "searching");
        self.ui.set_status(SEARCHING_STATUS);
        self.ui.set_results(&[]);

        let reply = self
            .transport
            .post_search(&request)
            .await
            .and_then(|raw| SearchReply::from_raw(&raw));

        if !self.is_latest(generation) {
            tracing::info!(generation, "discarding superseded response");
            return SubmitOutcome::Superseded;
        }

        match reply {
            Ok(reply) => self.render(reply),
            Err(e) => {
                tracing::warn!(generation, "search request failed, error: {e}");
                self.ui.set_status(&format!("Error: {e}"));
                SubmitOutcome::Failed(e)
            }
        }
    }

    fn is_latest(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    fn render(&self, reply: SearchReply) -> SubmitOutcome {
        self.ui.set_status("");
        match reply {
            SearchReply::Found { links } => {
                let entries: Vec<ProfileLink> = links.into_iter().map(ProfileLink::new).collect();
                tracing::info!(count = entries.len(), "profiles found");
                self.ui.set_results(&entries);
                SubmitOutcome::Displayed(entries.len())
            }
            SearchReply::NoProfiles => {
                self.ui.set_status(NO_PROFILES_STATUS);
                SubmitOutcome::NoProfiles
            }
            SearchReply::Failed { status, detail } => {
                tracing::warn!(status, detail = ?detail, "search API returned an error");
                self.ui
                    .set_status(detail.as_deref().unwrap_or(SEARCH_FAILED_FALLBACK));
                SubmitOutcome::Failed(SearchError::Api { status, detail })
            }
        }
    }
}
