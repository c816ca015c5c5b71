// Application state management

use crate::engine::{Issue, StatusGroups, TreeNode, build_forest};
use crate::ui::constants::ROW_COUNT;
use ratatui::widgets::ListState;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    /// One of the three tree lists on the left
    Rows,
    /// The detail pane on the right
    Detail,
}

pub struct AppState {
    /// One forest per board row, rebuilt on every refresh
    pub forests: [Vec<TreeNode>; 3],
    /// Selection state per board row
    pub rows: [ListState; 3],
    pub focused_row: usize,
    pub focused_pane: FocusedPane,
    pub detail_scroll: u16,
    pub last_refresh: Instant,
    pub command: String,
    pub refresh_secs: u64,
}

impl AppState {
    pub fn new(command: String, refresh_secs: u64) -> Self {
        let mut rows: [ListState; 3] = Default::default();
        for row in &mut rows {
            row.select(Some(0));
        }

        Self {
            forests: Default::default(),
            rows,
            focused_row: 0,
            focused_pane: FocusedPane::Rows,
            detail_scroll: 0,
            last_refresh: Instant::now(),
            command,
            refresh_secs,
        }
    }

    /// Swap in freshly fetched groups, rebuilding all three forests and
    /// clamping each row's selection to the new item count.
    pub fn apply_groups(&mut self, groups: StatusGroups) {
        self.forests = [
            build_forest(&groups.open),
            build_forest(&groups.in_progress),
            build_forest(&groups.closed),
        ];

        for (row, forest) in self.rows.iter_mut().zip(self.forests.iter()) {
            let prev = row.selected().unwrap_or(0);
            let last = forest.len().saturating_sub(1);
            row.select(Some(prev.min(last)));
        }
    }

    /// The issue under the cursor in the focused row, if any.
    pub fn selected_issue(&self) -> Option<&Issue> {
        let forest = &self.forests[self.focused_row];
        let selected = self.rows[self.focused_row].selected().unwrap_or(0);
        forest.get(selected).map(|node| &node.issue)
    }

    pub fn focus_row(&mut self, idx: usize) {
        self.focused_pane = FocusedPane::Rows;
        self.focused_row = idx % ROW_COUNT;
        self.detail_scroll = 0;
    }

    pub fn focus_detail(&mut self) {
        self.focused_pane = FocusedPane::Detail;
    }

    pub fn select_previous(&mut self) {
        let row = &mut self.rows[self.focused_row];
        if let Some(i) = row.selected() {
            if i > 0 {
                row.select(Some(i - 1));
                self.detail_scroll = 0;
            }
        }
    }

    pub fn select_next(&mut self) {
        let len = self.forests[self.focused_row].len();
        let row = &mut self.rows[self.focused_row];
        if let Some(i) = row.selected() {
            if len > 0 && i < len - 1 {
                row.select(Some(i + 1));
                self.detail_scroll = 0;
            }
        }
    }

    pub fn scroll_detail_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    pub fn scroll_detail_down(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_add(1);
    }
}
