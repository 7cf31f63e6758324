// Report rendering — terminal display lives in `terminal`; the bar
// formatting it shares with tests lives here.

pub mod terminal;

/// Width of the conformity bar in characters.
pub const BAR_WIDTH: usize = 100;

/// Render the conformity bar: one `#` per whole percentage point, `-` for
/// the remainder. The fill truncates rather than rounds, so 99.9% still
/// shows 99 filled characters.
pub fn render_bar(conformity: f64) -> String {
    let filled = (conformity as usize).min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_is_fixed_width() {
        for score in [0.0, 12.5, 50.0, 99.9, 100.0] {
            assert_eq!(render_bar(score).chars().count(), BAR_WIDTH + 2);
        }
    }

    #[test]
    fn test_bar_truncates_fill() {
        let bar = render_bar(99.9);
        assert_eq!(bar.matches('#').count(), 99);
        assert_eq!(bar.matches('-').count(), 1);
    }

    #[test]
    fn test_bar_extremes() {
        assert_eq!(render_bar(0.0), format!("[{}]", "-".repeat(100)));
        assert_eq!(render_bar(100.0), format!("[{}]", "#".repeat(100)));
    }
}
