/// User interface and status output utilities
///
/// This module handles:
/// - Colored terminal text
/// - Status, warning and error message formatting
///
/// Everything here goes to stdout; diagnostics go through `log`.
use std::io::Write;

/// Print colored text to terminal, with fallback to plain text
fn print_color(s: &str, fg: term::color::Color) {
    if !really_print_color(s, fg) {
        print!("{}", s);
    }

    fn really_print_color(s: &str, fg: term::color::Color) -> bool {
        let Some(mut t) = term::stdout() else {
            return false;
        };
        if t.fg(fg).is_err() {
            return false;
        }
        let _ = t.attr(term::Attr::Bold);
        if write!(t, "{}", s).is_err() {
            return false;
        }
        let _ = t.reset();
        true
    }
}

/// Print a status line
pub fn status(s: &str) {
    println!("{}", s);
}

/// Print a non-fatal warning with a colored "Warning" prefix
pub fn warning(msg: &str) {
    print_color("Warning", term::color::BRIGHT_YELLOW);
    println!(": {}", msg);
}

/// Print an error message with colored "error" prefix
pub fn print_error(msg: &str) {
    println!();
    print_color("error", term::color::BRIGHT_RED);
    println!(": {}", msg);
    println!();
}
