use crate::{ExtractFailure, Submission, Theme};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    /// False until the theme preference has resolved; hosts must not
    /// render themed content while this is false.
    pub mounted: bool,
    pub theme: Theme,
    pub query_text: String,
    pub keywords: Vec<String>,
    pub submission: Submission,
    /// Outcome of the newest submission when it failed. Whether and how
    /// this is surfaced is the host's decision.
    pub last_failure: Option<ExtractFailure>,
    pub dirty: bool,
}
