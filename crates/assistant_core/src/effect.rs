#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue one extraction request carrying the query text verbatim.
    RequestExtraction {
        request_id: crate::RequestId,
        text: String,
    },
    /// Write the toggled preference to the external store.
    PersistTheme { theme: crate::Theme },
}
