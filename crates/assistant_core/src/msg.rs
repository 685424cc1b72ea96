#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the query input box.
    QueryEdited(String),
    /// User submitted the current query text for keyword extraction.
    SubmitClicked,
    /// Extraction service returned a keyword list for a request.
    ExtractionSucceeded {
        request_id: crate::RequestId,
        keywords: Vec<String>,
    },
    /// Extraction call failed (transport, status, or decode).
    ExtractionFailed {
        request_id: crate::RequestId,
        failure: crate::ExtractFailure,
    },
    /// Persisted theme preference has been read; `None` means the store
    /// had nothing usable. First delivery mounts the machine.
    ThemeResolved(Option<crate::Theme>),
    /// User clicked the light/dark toggle.
    ThemeToggled,
    /// Fallback for placeholder wiring.
    NoOp,
}
