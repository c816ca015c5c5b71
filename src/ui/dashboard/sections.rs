use super::*;

impl Dashboard {
    pub(super) fn render_row(
        frame: &mut Frame,
        area: ratatui::layout::Rect,
        state: &mut AppState,
        idx: usize,
        title_budget: usize,
    ) {
        let focused = state.focused_pane == FocusedPane::Rows && state.focused_row == idx;
        let (border, label) = if focused {
            (Color::Yellow, Color::Yellow)
        } else {
            (Color::Blue, Color::White)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", ROW_TITLES[idx]))
            .border_style(Style::default().fg(border))
            .title_style(Style::default().fg(label).bold());

        let forest = &state.forests[idx];
        let items: Vec<ListItem> = if forest.is_empty() {
            vec![ListItem::new(Line::styled(
                "  (empty)",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            forest
                .iter()
                .map(|node| ListItem::new(Self::format_list_item(node, title_budget)))
                .collect()
        };

        let list = List::new(items).block(block).highlight_style(
            Style::default().bg(Color::Blue).fg(Color::White).bold(),
        );

        frame.render_stateful_widget(list, area, &mut state.rows[idx]);
    }

    pub(super) fn render_detail(
        frame: &mut Frame,
        area: ratatui::layout::Rect,
        state: &AppState,
    ) {
        let focused = state.focused_pane == FocusedPane::Detail;
        let (border, label) = if focused {
            (Color::Yellow, Color::Yellow)
        } else {
            (Color::Green, Color::White)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Detail ")
            .border_style(Style::default().fg(border))
            .title_style(Style::default().fg(label).bold());

        let detail = Paragraph::new(Self::format_detail(state.selected_issue()))
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((state.detail_scroll, 0));

        frame.render_widget(detail, area);
    }

    /// One board line: tree prefix, priority/type/blocked badges, dimmed id,
    /// and the title truncated to the row's budget.
    pub(super) fn format_list_item(node: &TreeNode, title_budget: usize) -> Line<'static> {
        let issue = &node.issue;

        let mut spans = vec![
            Span::raw(node.prefix.clone()),
            Span::styled(
                format!("[{}]", priority_label(issue.priority)),
                Style::default().fg(priority_color(issue.priority)),
            ),
            Span::styled(format!("[{}]", issue.kind), Style::default().fg(Color::Cyan)),
        ];

        if issue.blocked {
            spans.push(Span::styled("[BLK]", Style::default().fg(Color::Red)));
        }

        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            issue.id.clone(),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::raw(" "));
        spans.push(Span::raw(Self::truncate_title(
            &issue.title,
            title_budget,
            &node.prefix,
        )));

        Line::from(spans)
    }

    /// Deterministic truncation: the prefix eats into the budget, but at
    /// least 8 columns always remain; longer titles are cut to make room
    /// for a three-dot ellipsis.
    fn truncate_title(title: &str, title_budget: usize, prefix: &str) -> String {
        let available = title_budget.saturating_sub(prefix.chars().count()).max(8);
        if title.chars().count() > available {
            let cut: String = title.chars().take(available - 3).collect();
            format!("{}...", cut)
        } else {
            title.to_string()
        }
    }

    /// The right-hand pane: metadata line, title, rule, description.
    pub(super) fn format_detail(issue: Option<&Issue>) -> Text<'static> {
        let Some(issue) = issue else {
            return Text::from(Line::styled(
                "  Navigate to an issue to see its details.",
                Style::default().fg(Color::DarkGray),
            ));
        };

        let owner = if issue.owner.is_empty() {
            "—".to_string()
        } else {
            issue.owner.clone()
        };

        let readiness = if issue.blocked {
            Span::styled("blocked", Style::default().fg(Color::Red))
        } else {
            Span::styled("ready", Style::default().fg(Color::Green))
        };

        let meta = Line::from(vec![
            Span::raw("  "),
            Span::styled(issue.id.clone(), Style::default().bold()),
            Span::raw("  "),
            Span::styled(
                format!("P{}", issue.priority),
                Style::default().fg(priority_color(issue.priority)),
            ),
            Span::raw("  "),
            Span::styled(issue.kind.clone(), Style::default().fg(Color::Cyan)),
            Span::raw("  "),
            Span::raw(format!("owner: {}", owner)),
            Span::raw("  "),
            readiness,
        ]);

        let mut lines = vec![
            meta,
            Line::from(vec![
                Span::raw("  "),
                Span::styled(issue.title.clone(), Style::default().bold()),
            ]),
            Line::styled(
                format!("  {}", "─".repeat(21)),
                Style::default().fg(Color::DarkGray),
            ),
        ];

        if issue.description.is_empty() {
            lines.push(Line::styled(
                "  (no description)",
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            for text_line in issue.description.lines() {
                lines.push(Line::from(format!("  {}", text_line)));
            }
        }

        Text::from(lines)
    }
}
