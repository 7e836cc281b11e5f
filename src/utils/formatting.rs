//! Formatting utilities used for CLI and report outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Whole minutes as `7h05`, used by the live duration display.
pub fn mins2readable(mins: i64) -> String {
    let m = mins.max(0);
    format!("{}h{:02}", m / 60, m % 60)
}

/// Decimal hours as `7h30min`.
///
/// Minutes are rounded; a fraction that rounds up to 60 carries into the
/// hour (`7.999` gives `8h00min`, never `7h60min`).
pub fn hours2readable(hours: f64) -> String {
    let mut whole = hours.floor() as i64;
    let mut minutes = ((hours - hours.floor()) * 60.0).round() as i64;
    if minutes == 60 {
        whole += 1;
        minutes = 0;
    }
    format!("{}h{:02}min", whole, minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_minutes() {
        assert_eq!(mins2readable(0), "0h00");
        assert_eq!(mins2readable(450), "7h30");
        assert_eq!(mins2readable(65), "1h05");
        assert_eq!(mins2readable(-3), "0h00");
    }

    #[test]
    fn decimal_hours() {
        assert_eq!(hours2readable(7.5), "7h30min");
        assert_eq!(hours2readable(15.5), "15h30min");
        assert_eq!(hours2readable(8.0), "8h00min");
        assert_eq!(hours2readable(0.0), "0h00min");
        assert_eq!(hours2readable(8.33), "8h20min");
    }

    #[test]
    fn minutes_rounding_to_sixty_carry_into_the_hour() {
        assert_eq!(hours2readable(7.999), "8h00min");
        assert_eq!(hours2readable(0.995), "1h00min");
    }
}
