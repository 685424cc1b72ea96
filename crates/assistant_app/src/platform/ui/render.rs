use assistant_core::{AppViewModel, Submission};

use super::constants;

pub fn print_help() {
    println!(
        "Type a query and press enter to extract keywords. `{}` toggles the theme, `{}` exits.",
        constants::THEME_COMMAND,
        constants::QUIT_COMMAND
    );
}

/// Prints the current view. Nothing themed is produced before mount.
pub fn render(view: &AppViewModel) {
    for line in view_lines(view) {
        println!("{line}");
    }
}

/// Builds the visible lines for a view model.
pub fn view_lines(view: &AppViewModel) -> Vec<String> {
    if !view.mounted {
        return Vec::new();
    }

    let mut lines = Vec::new();
    lines.push(format!("[{}] {}", view.theme.name(), constants::BANNER));

    if view.keywords.is_empty() {
        lines.push("(no keywords yet)".to_string());
    } else {
        for (index, keyword) in view.keywords.iter().enumerate() {
            lines.push(format!("  {}. {}", index + 1, keyword));
        }
    }

    match view.submission {
        Submission::Submitting => lines.push("extracting...".to_string()),
        Submission::Idle => {
            if let Some(failure) = view.last_failure {
                lines.push(format!("last request failed: {failure}"));
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mounted_view() -> AppViewModel {
        AppViewModel {
            mounted: true,
            ..AppViewModel::default()
        }
    }

    #[test]
    fn nothing_renders_before_mount() {
        let view = AppViewModel::default();
        assert!(view_lines(&view).is_empty());
    }

    #[test]
    fn mounted_view_shows_theme_and_placeholder() {
        let view = mounted_view();
        let lines = view_lines(&view);
        assert_eq!(lines[0], format!("[light] {}", constants::BANNER));
        assert_eq!(lines[1], "(no keywords yet)");
    }

    #[test]
    fn keywords_render_in_order() {
        let mut view = mounted_view();
        view.keywords = vec!["quantum".to_string(), "computing".to_string()];
        let lines = view_lines(&view);
        assert_eq!(lines[1], "  1. quantum");
        assert_eq!(lines[2], "  2. computing");
    }

    #[test]
    fn failure_notice_is_shown_when_idle() {
        let mut view = mounted_view();
        view.last_failure = Some(assistant_core::ExtractFailure::HttpStatus(502));
        let lines = view_lines(&view);
        assert_eq!(lines.last().unwrap(), "last request failed: http status 502");
    }

    #[test]
    fn submitting_status_replaces_failure_notice() {
        let mut view = mounted_view();
        view.submission = Submission::Submitting;
        view.last_failure = Some(assistant_core::ExtractFailure::Network);
        let lines = view_lines(&view);
        assert_eq!(lines.last().unwrap(), "extracting...");
    }
}
