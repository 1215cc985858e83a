// Rust guideline compliant 2026-10-15

//! Terminal helpers for the Tierlist CLI.
//!
//! Status lines go to stderr so stdout stays clean for command output.

use std::env;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
pub fn should_use_color() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }

    atty::is(atty::Stream::Stdout) && atty::is(atty::Stream::Stderr)
}

fn color_choice(use_color: bool) -> ColorChoice {
    if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Prints a status message with a colored prefix to stderr.
///
/// # Arguments
/// * `prefix` - The prefix text
/// * `prefix_color` - The color for the prefix
/// * `message` - The message text
/// * `use_color` - Whether to emit color codes at all
pub fn print_status(prefix: &str, prefix_color: Color, message: &str, use_color: bool) {
    let mut stderr = StandardStream::stderr(color_choice(use_color));
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(prefix_color)).set_bold(true));
    let _ = write!(stderr, "{}", prefix);
    let _ = stderr.reset();
    let _ = writeln!(stderr, " {}", message);
}

/// Prints an error message to stderr.
pub fn print_error(message: &str, use_color: bool) {
    print_status("✗", Color::Red, message, use_color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_choice_never_when_disabled() {
        assert_eq!(color_choice(false), ColorChoice::Never);
        assert_eq!(color_choice(true), ColorChoice::Auto);
    }

    #[test]
    fn test_should_use_color_does_not_panic() {
        // Result depends on the test runner's terminal.
        let _ = should_use_color();
    }
}
