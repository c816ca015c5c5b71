// Badge and board constants - single source of truth
// The fixed column budget must match the badge spans built in src/ui/dashboard/sections.rs

use ratatui::style::Color;

// Priority badges, indexed by priority 0-4 (lower = more urgent)
pub const PRIORITY_LABELS: &[&str] = &["P0", "P1", "P2", "P3", "P4"];
pub const PRIORITY_COLORS: &[Color] = &[
    Color::Red,
    Color::Yellow,
    Color::White,
    Color::DarkGray,
    Color::DarkGray,
];

// The two tables must stay index-aligned
const _: () = assert!(PRIORITY_LABELS.len() == PRIORITY_COLORS.len());

/// Badge label for a priority, with a fallback for out-of-range values.
pub fn priority_label(priority: u8) -> String {
    PRIORITY_LABELS
        .get(priority as usize)
        .map(|l| (*l).to_string())
        .unwrap_or_else(|| format!("P{}", priority))
}

/// Badge color for a priority, with a fallback for out-of-range values.
pub fn priority_color(priority: u8) -> Color {
    PRIORITY_COLORS
        .get(priority as usize)
        .copied()
        .unwrap_or(Color::White)
}

// Board rows, top to bottom
pub const ROW_TITLES: &[&str] = &["Open / Blocked", "In Progress", "Done (last 10)"];
pub const ROW_COUNT: usize = 3;

// Columns left of the title: pri(4) + type(8) + blk max(5) + id(12) + space(1)
pub const FIXED_PREFIX: u16 = 4 + 8 + 5 + 12 + 1;

// Left column width as a percentage of the screen
pub const LEFT_PCT: u16 = 60;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_priorities_use_the_table() {
        assert_eq!(priority_label(0), "P0");
        assert_eq!(priority_label(4), "P4");
        assert_eq!(priority_color(0), Color::Red);
        assert_eq!(priority_color(1), Color::Yellow);
    }

    #[test]
    fn out_of_range_priority_falls_back() {
        assert_eq!(priority_label(9), "P9");
        assert_eq!(priority_color(9), Color::White);
    }
}
