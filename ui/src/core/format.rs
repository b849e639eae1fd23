//! Formatting helpers for presenting static data.

pub fn format_percent(value: u8) -> String {
    format!("{value}%")
}

/// Inline `width` style for a progress bar, clamped to 0..=100.
pub fn bar_width_style(value: u8) -> String {
    format!("width: {}%", value.min(100))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_and_width() {
        assert_eq!(format_percent(75), "75%");
        assert_eq!(bar_width_style(85), "width: 85%");
        assert_eq!(bar_width_style(250), "width: 100%");
    }
}
