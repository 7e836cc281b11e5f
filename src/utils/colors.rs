/// ANSI color helper utilities for terminal output.
use crate::models::day_state::DayState;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Badge color of a status label:
/// completed → green, working → cyan, lunch → yellow, not started → grey.
pub fn color_for_state(state: DayState) -> &'static str {
    match state {
        DayState::Completed => GREEN,
        DayState::Working => CYAN,
        DayState::OnLunch => YELLOW,
        DayState::NotStarted => GREY,
    }
}

/// Greys out empty placeholders.
///
/// Example:
/// `colorize_optional("0h00")` → "<grey>0h00<reset>"
pub fn colorize_optional(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == "0h00" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_empty_and_zero_durations_are_greyed() {
        assert_eq!(colorize_optional("0h00"), format!("{GREY}0h00{RESET}"));
        assert_eq!(colorize_optional(""), format!("{GREY}{RESET}"));
        assert_eq!(colorize_optional("--:--"), "--:--");
        assert_eq!(colorize_optional("7h05"), "7h05");
    }
}
