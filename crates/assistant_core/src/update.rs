use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::QueryEdited(text) => {
            state.set_query_text(text);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // The empty string is a valid query; it goes out verbatim.
            let request_id = state.begin_submission();
            vec![Effect::RequestExtraction {
                request_id,
                text: state.query_text().to_owned(),
            }]
        }
        Msg::ExtractionSucceeded {
            request_id,
            keywords,
        } => {
            // Stale responses (superseded by a newer submission) are dropped
            // inside apply_success; only the newest request is authoritative.
            state.apply_success(request_id, keywords);
            Vec::new()
        }
        Msg::ExtractionFailed {
            request_id,
            failure,
        } => {
            state.apply_failure(request_id, failure);
            Vec::new()
        }
        Msg::ThemeResolved(stored) => {
            state.mount(stored);
            Vec::new()
        }
        Msg::ThemeToggled => {
            if state.mounted() {
                let theme = state.toggle_theme();
                vec![Effect::PersistTheme { theme }]
            } else {
                // Nothing themed exists before mount; ignore.
                Vec::new()
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
