pub mod banner;
pub mod dashboard;
pub mod json;
pub mod tui;

pub use dashboard::TerminalDisplay;
pub use json::JsonDisplay;
pub use tui::TuiInputPort;

/// Prints the welcome banner (unless disabled) and applies the theme for all
/// subsequent inquire prompts. Call once at startup (e.g. in main after tracing init).
pub fn init_ui(show_banner: bool) {
    if show_banner {
        banner::print_welcome();
    }
    tui::apply_theme();
}
