//! Toast overlay for the live notification

use crate::store::NotificationRecord;
use crate::ui::core::ViewContext;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

pub struct Toast;

impl Toast {
    /// Draw the notification over the bottom of `area`. Does nothing while hidden.
    pub fn render(f: &mut Frame, area: Rect, notif: &NotificationRecord, ctx: &ViewContext) {
        if !notif.visible {
            return;
        }

        let text = format!("{} {}", ctx.icons.notification(notif.kind), notif.text());
        let text_width = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        let toast_area = LayoutManager::toast_area(area, text_width);

        let theme = &ctx.theme;
        let style = Style::default().fg(theme.toast_fg).bg(theme.toast_bg);

        f.render_widget(Clear, toast_area);
        let paragraph = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .style(style),
            )
            .style(style.add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, toast_area);
    }
}
