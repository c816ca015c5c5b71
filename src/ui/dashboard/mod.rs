// Dashboard screen implementation

use crate::engine::{Issue, TreeNode};
use crate::ui::components::Header;
use crate::ui::constants::{ROW_COUNT, ROW_TITLES, priority_color, priority_label};
use crate::ui::layout;
use crate::ui::state::{AppState, FocusedPane};
use ratatui::{
    Frame,
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

mod sections;

pub struct Dashboard;

impl Dashboard {
    pub fn render(frame: &mut Frame, state: &mut AppState) {
        let area = frame.area();
        if area.width < 4 || area.height <= layout::HEADER_HEIGHT {
            return;
        }

        let clock = chrono::Local::now().format("%H:%M:%S").to_string();
        frame.render_widget(Header::board(clock), layout::header_rect(area));

        let title_budget = layout::max_title_len(area.width);
        for i in 0..ROW_COUNT {
            Self::render_row(frame, layout::row_rect(i, area), state, i, title_budget);
        }

        Self::render_detail(frame, layout::detail_rect(area), state);
    }
}
