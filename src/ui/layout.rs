// Responsive board geometry - pure functions of the terminal size, recomputed every frame

use crate::ui::constants::{FIXED_PREFIX, LEFT_PCT, ROW_COUNT};
use ratatui::layout::Rect;

/// One line reserved at the top of the screen.
pub const HEADER_HEIGHT: u16 = 1;

/// Screen rows available to the three board lists.
pub fn board_total(screen_height: u16) -> u16 {
    screen_height.saturating_sub(HEADER_HEIGHT)
}

/// Height of board row `i`: floor thirds of `total`, with the last row
/// absorbing the remainder so the three always sum exactly to `total`.
pub fn row_height(i: usize, total: u16) -> u16 {
    let third = total / ROW_COUNT as u16;
    if i < ROW_COUNT - 1 {
        third
    } else {
        total - (ROW_COUNT as u16 - 1) * third
    }
}

/// Top coordinate of board row `i`, below the header.
pub fn row_top(i: usize, total: u16) -> u16 {
    let mut top = HEADER_HEIGHT;
    for j in 0..i {
        top += row_height(j, total);
    }
    top
}

/// Width of the left (tree) column.
pub fn left_width(screen_width: u16) -> u16 {
    (u32::from(screen_width) * u32::from(LEFT_PCT) / 100) as u16
}

/// Character budget for a list item's title: the left column minus borders
/// and the fixed badge/id columns, never below 10.
pub fn max_title_len(screen_width: u16) -> usize {
    (left_width(screen_width) as usize)
        .saturating_sub(4 + FIXED_PREFIX as usize)
        .max(10)
}

pub fn header_rect(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: HEADER_HEIGHT.min(area.height),
    }
}

pub fn row_rect(i: usize, area: Rect) -> Rect {
    let total = board_total(area.height);
    Rect {
        x: area.x,
        y: area.y + row_top(i, total),
        width: left_width(area.width),
        height: row_height(i, total),
    }
}

pub fn detail_rect(area: Rect) -> Rect {
    let left = left_width(area.width);
    Rect {
        x: area.x + left,
        y: area.y + HEADER_HEIGHT,
        width: area.width.saturating_sub(left),
        height: board_total(area.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_heights_sum_to_total() {
        for total in 0..=120 {
            let sum: u16 = (0..ROW_COUNT).map(|i| row_height(i, total)).sum();
            assert_eq!(sum, total, "heights must tile total={}", total);
        }
    }

    #[test]
    fn last_row_absorbs_remainder() {
        assert_eq!(row_height(0, 10), 3);
        assert_eq!(row_height(1, 10), 3);
        assert_eq!(row_height(2, 10), 4);
    }

    #[test]
    fn row_tops_are_cumulative_below_header() {
        assert_eq!(row_top(0, 10), 1);
        assert_eq!(row_top(1, 10), 4);
        assert_eq!(row_top(2, 10), 7);
    }

    #[test]
    fn title_budget_tracks_left_column() {
        // 120 cols: left = 72, minus borders (4) and badges (30) = 38
        assert_eq!(max_title_len(120), 38);
    }

    #[test]
    fn title_budget_never_drops_below_floor() {
        assert_eq!(max_title_len(0), 10);
        assert_eq!(max_title_len(40), 10);
    }

    #[test]
    fn rows_and_detail_tile_the_screen() {
        let area = Rect::new(0, 0, 100, 31);

        let left = left_width(area.width);
        assert_eq!(left, 60);

        let detail = detail_rect(area);
        assert_eq!(detail.x, left);
        assert_eq!(detail.width, area.width - left);
        assert_eq!(detail.y, 1);
        assert_eq!(detail.height, 30);

        let mut y = HEADER_HEIGHT;
        for i in 0..ROW_COUNT {
            let row = row_rect(i, area);
            assert_eq!(row.y, y);
            assert_eq!(row.width, left);
            y += row.height;
        }
        assert_eq!(y, area.height);
    }

    #[test]
    fn degenerate_screen_yields_empty_rows() {
        let area = Rect::new(0, 0, 10, 1);
        for i in 0..ROW_COUNT {
            assert_eq!(row_rect(i, area).height, 0);
        }
    }
}
