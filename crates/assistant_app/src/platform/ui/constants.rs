/// Line commands understood by the input reader.
pub const THEME_COMMAND: &str = ":theme";
pub const QUIT_COMMAND: &str = ":quit";

pub const BANNER: &str = "How can I help you today?";
