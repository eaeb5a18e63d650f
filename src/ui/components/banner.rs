//! Welcome banner shown until the user dismisses it

use crate::constants::{BANNER_DISMISS_HINT, BANNER_TEXT};
use crate::ui::core::ViewContext;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

pub struct Banner;

impl Banner {
    pub fn render(f: &mut Frame, area: Rect, ctx: &ViewContext) {
        let theme = &ctx.theme;
        let style = Style::default().fg(theme.banner_fg).bg(theme.banner_bg);

        let line = Line::from(vec![
            Span::styled(format!("{} ", ctx.icons.banner()), style.add_modifier(Modifier::BOLD)),
            Span::styled(BANNER_TEXT, style),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.banner_fg))
            .title_bottom(Line::from(Span::styled(format!(" {} ", BANNER_DISMISS_HINT), style)).right_aligned())
            .style(style);

        let paragraph = Paragraph::new(line)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }
}
