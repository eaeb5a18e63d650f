//! Status bar component

use crate::constants::{APP_TITLE, STATUS_SHORTCUTS};
use crate::ui::core::ViewContext;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render counts and theme on the left, shortcuts on the right
    pub fn render(f: &mut Frame, area: Rect, counts: (usize, usize), dark_mode: bool, ctx: &ViewContext) {
        let theme = &ctx.theme;
        let (active, done) = counts;

        let left = Line::from(vec![
            Span::styled(
                format!(" {} ", APP_TITLE),
                Style::default().fg(theme.highlight).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("{} active • {} done ", active, done), Style::default().fg(theme.text)),
            Span::styled(
                format!("{} {}", ctx.icons.theme_mode(dark_mode), if dark_mode { "dark" } else { "light" }),
                theme.dim(),
            ),
        ]);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(30), Constraint::Percentage(60)])
            .split(area);

        f.render_widget(Paragraph::new(left).style(theme.base()), chunks[0]);
        f.render_widget(
            Paragraph::new(STATUS_SHORTCUTS)
                .style(theme.dim().bg(theme.background))
                .alignment(ratatui::layout::Alignment::Right),
            chunks[1],
        );
    }
}
