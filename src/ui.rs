use std::io::Write;
use std::sync::Mutex;

/// Where a rendered link opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    SameContext,
    NewContext,
}

/// One entry of the results list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileLink {
    pub href: String,
    pub text: String,
    pub target: LinkTarget,
}

impl ProfileLink {
    /// A link whose visible text and target are both `url`, opening in a new context.
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        ProfileLink {
            href: url.clone(),
            text: url,
            target: LinkTarget::NewContext,
        }
    }
}

/// The two display regions a search writes to. Each call replaces the slot.
pub trait UiPort: Send + Sync {
    fn set_status(&self, text: &str);
    fn set_results(&self, links: &[ProfileLink]);
}

/// Status to stderr, results to stdout as OSC 8 hyperlinks.
#[derive(Debug, Default)]
pub struct TerminalUi;

/// Replaces control characters so server text can't inject terminal escapes.
pub fn inert(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { '\u{FFFD}' } else { c })
        .collect()
}

impl TerminalUi {
    pub fn render_link(link: &ProfileLink) -> String {
        format!(
            "\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\",
            inert(&link.href),
            inert(&link.text)
        )
    }
}

impl UiPort for TerminalUi {
    fn set_status(&self, text: &str) {
        if text.is_empty() {
            return;
        }
        eprintln!("{}", inert(text));
    }

    fn set_results(&self, links: &[ProfileLink]) {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        for link in links {
            if let Err(e) = writeln!(out, "  • {}", Self::render_link(link)) {
                tracing::error!("error writing result, error: {e}");
                return;
            }
        }
    }
}

#[derive(Debug, Default)]
struct MemorySlots {
    status: String,
    results: Vec<ProfileLink>,
    status_history: Vec<String>,
}

/// In-memory UI that remembers every status it was given. Used as a test double.
#[derive(Debug, Default)]
pub struct MemoryUi {
    slots: Mutex<MemorySlots>,
}

impl MemoryUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> String {
        self.lock().status.clone()
    }

    pub fn results(&self) -> Vec<ProfileLink> {
        self.lock().results.clone()
    }

    pub fn status_history(&self) -> Vec<String> {
        self.lock().status_history.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemorySlots> {
        // a panicking writer can't leave the slots half-updated
        self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl UiPort for MemoryUi {
    fn set_status(&self, text: &str) {
        let mut slots = self.lock();
        slots.status = text.to_string();
        slots.status_history.push(text.to_string());
    }

    fn set_results(&self, links: &[ProfileLink]) {
        self.lock().results = links.to_vec();
    }
}
