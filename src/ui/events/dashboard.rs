use super::*;

use crate::engine;
use crate::ui::constants::ROW_COUNT;
use crate::ui::state::FocusedPane;
use tracing::debug;

/// Synchronous full refresh: fetch, group, and rebuild all three forests.
/// A source failure surfaces as empty sections, never as a crash.
pub(super) fn refresh(state: &mut AppState) {
    let started = Instant::now();
    let groups = engine::fetch_grouped(&state.command);
    debug!(elapsed_ms = started.elapsed().as_millis() as u64, "board refreshed");

    state.apply_groups(groups);
    state.last_refresh = Instant::now();
}

pub(super) fn handle_dashboard_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        // Manual refresh
        KeyCode::Char('r') | KeyCode::Char('R') => {
            refresh(state);
        }
        // Cycle the focused board row
        KeyCode::Tab => {
            state.focus_row((state.focused_row + 1) % ROW_COUNT);
        }
        KeyCode::BackTab => {
            state.focus_row((state.focused_row + ROW_COUNT - 1) % ROW_COUNT);
        }
        // Switch columns: left re-enters the tree lists, right the detail pane
        KeyCode::Left => {
            state.focus_row(state.focused_row);
        }
        KeyCode::Right => {
            state.focus_detail();
        }
        // Navigate the focused list, or scroll the detail pane
        KeyCode::Up => match state.focused_pane {
            FocusedPane::Rows => state.select_previous(),
            FocusedPane::Detail => state.scroll_detail_up(),
        },
        KeyCode::Down => match state.focused_pane {
            FocusedPane::Rows => state.select_next(),
            FocusedPane::Detail => state.scroll_detail_down(),
        },
        _ => {}
    }
}
