use std::fmt;

use crate::view_model::AppViewModel;

/// Monotonic identifier for one submission cycle.
pub type RequestId = u64;

/// Persisted display preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn flipped(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Canonical store value (`light` / `dark`).
    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_name(name: &str) -> Option<Theme> {
        match name {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// Whether the newest submission is still awaiting its response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Submission {
    #[default]
    Idle,
    Submitting,
}

/// Outcome of a failed extraction, as reported to the host.
///
/// The state machine treats every variant the same way (keywords stay
/// untouched); the distinction exists for diagnostics and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractFailure {
    Network,
    Timeout,
    HttpStatus(u16),
    MalformedResponse,
}

impl fmt::Display for ExtractFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractFailure::Network => write!(f, "network error"),
            ExtractFailure::Timeout => write!(f, "timeout"),
            ExtractFailure::HttpStatus(code) => write!(f, "http status {code}"),
            ExtractFailure::MalformedResponse => write!(f, "malformed response"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    query_text: String,
    keywords: Vec<String>,
    theme: Theme,
    mounted: bool,
    // Id of the most recently issued request; 0 means none yet.
    last_issued: RequestId,
    // Set while the most recently issued request is unresolved.
    pending: Option<RequestId>,
    last_failure: Option<ExtractFailure>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            mounted: self.mounted,
            theme: self.theme,
            query_text: self.query_text.clone(),
            keywords: self.keywords.clone(),
            submission: if self.pending.is_some() {
                Submission::Submitting
            } else {
                Submission::Idle
            },
            last_failure: self.last_failure,
            dirty: self.dirty,
        }
    }

    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    pub fn mounted(&self) -> bool {
        self.mounted
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns the dirty flag and clears it.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_query_text(&mut self, text: String) {
        if self.query_text == text {
            return;
        }
        self.query_text = text;
        self.mark_dirty();
    }

    /// Allocates the next request id and makes it the sole authoritative
    /// submission; any earlier in-flight request becomes stale.
    pub(crate) fn begin_submission(&mut self) -> RequestId {
        self.last_issued += 1;
        self.pending = Some(self.last_issued);
        self.last_failure = None;
        self.mark_dirty();
        self.last_issued
    }

    pub(crate) fn apply_success(&mut self, request_id: RequestId, keywords: Vec<String>) {
        if self.pending != Some(request_id) {
            return;
        }
        // Whole-value replacement, never a merge.
        self.keywords = keywords;
        self.pending = None;
        self.mark_dirty();
    }

    pub(crate) fn apply_failure(&mut self, request_id: RequestId, failure: ExtractFailure) {
        if self.pending != Some(request_id) {
            return;
        }
        self.pending = None;
        self.last_failure = Some(failure);
        self.mark_dirty();
    }

    /// One-shot mount: applies the stored preference (or the light
    /// fallback) and unblocks themed rendering. Re-invocation is a no-op.
    pub(crate) fn mount(&mut self, stored: Option<Theme>) {
        if self.mounted {
            return;
        }
        self.theme = stored.unwrap_or_default();
        self.mounted = true;
        self.mark_dirty();
    }

    pub(crate) fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.flipped();
        self.mark_dirty();
        self.theme
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
