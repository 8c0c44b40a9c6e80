//! Color and formatting utilities for terminal output

pub struct Colors;

impl Colors {
    pub const RESET: &'static str = "\x1b[0m";
    pub const BOLD: &'static str = "\x1b[1m";
    pub const DIM: &'static str = "\x1b[2m";

    pub const GREEN: &'static str = "\x1b[32m";
    pub const YELLOW: &'static str = "\x1b[33m";
    pub const BLUE: &'static str = "\x1b[34m";
    pub const MAGENTA: &'static str = "\x1b[35m";
    pub const CYAN: &'static str = "\x1b[36m";

    pub const BRIGHT_BLACK: &'static str = "\x1b[90m";
    pub const BRIGHT_CYAN: &'static str = "\x1b[96m";
}

/// Apply color to text if terminal supports it
pub fn colorize(text: &str, color: &str) -> String {
    if supports_formatting() {
        format!("{}{}{}", color, text, Colors::RESET)
    } else {
        text.to_string()
    }
}

/// Terminal capability detection, honoring `NO_COLOR` and `FORCE_COLOR`
pub fn supports_formatting() -> bool {
    use std::env;
    use std::io::IsTerminal;

    if env::var("NO_COLOR").is_ok() || env::var("FORCE_COLOR").as_deref() == Ok("0") {
        return false;
    }

    if env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    // Disable formatting when running tests
    if cfg!(test) || env::var("RUST_TEST_TIME_UNIT").is_ok() {
        return false;
    }

    if !std::io::stdout().is_terminal() {
        return false;
    }

    match env::var("TERM") {
        Ok(term) if term == "dumb" || term.is_empty() => false,
        Ok(term) => {
            term.contains("color")
                || term.contains("256")
                || term.starts_with("xterm")
                || term.starts_with("screen")
                || term.starts_with("tmux")
                || term == "linux"
        }
        Err(_) => matches!(
            env::var("TERM_PROGRAM").as_deref(),
            Ok("Apple_Terminal" | "iTerm.app" | "vscode" | "Alacritty" | "kitty" | "WezTerm")
        ),
    }
}
