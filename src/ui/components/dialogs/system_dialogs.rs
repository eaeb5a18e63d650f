use super::scroll_behavior::DialogScroll;
use crate::constants::DIALOG_TITLE_LOGS;
use crate::ui::core::ViewContext;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation},
    Frame,
};

pub const HELP_TEXT: &str = r"
NAVIGATION
----------
j/k, ↑/↓    Move selection down/up
g/Home      Jump to first todo
End         Jump to last todo
Tab         Switch between Active and Done

TODOS
-----
a           Add a new todo
e           Edit selected todo
Space/Enter Toggle done
d/Delete    Remove selected todo
c           Clear every todo in the focused panel
X           Clear all todos

APPEARANCE
----------
t           Toggle dark mode
i           Cycle icon theme
x           Dismiss the welcome banner

GENERAL
-------
?           Toggle this help
G           Show logs
Esc         Close dialog
q, Ctrl+C   Quit

Press 'Esc' or '?' to close this help
";

pub fn render_help_dialog(f: &mut Frame, area: Rect, ctx: &ViewContext, scroll: &mut DialogScroll) {
    let lines: Vec<&str> = HELP_TEXT.lines().collect();
    let title = format!(" {} Help ", ctx.icons.info());
    render_scrollable_text(f, area, ctx, &title, &lines, scroll);
}

/// Logs are shown newest first, as returned by the in-memory logger.
pub fn render_logs_dialog(f: &mut Frame, area: Rect, ctx: &ViewContext, logs: &[String], scroll: &mut DialogScroll) {
    let lines: Vec<&str> = if logs.is_empty() {
        vec!["No logs yet"]
    } else {
        logs.iter().flat_map(|entry| entry.lines()).collect()
    };
    let title = format!(" {} ", DIALOG_TITLE_LOGS);
    render_scrollable_text(f, area, ctx, &title, &lines, scroll);
}

fn render_scrollable_text(
    f: &mut Frame,
    area: Rect,
    ctx: &ViewContext,
    title: &str,
    lines: &[&str],
    scroll: &mut DialogScroll,
) {
    let theme = &ctx.theme;
    let dialog_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, dialog_area);

    let visible_height = dialog_area.height.saturating_sub(2) as usize;
    let offset = scroll.clamp(lines.len(), visible_height);

    let text = lines
        .iter()
        .skip(offset)
        .take(visible_height)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme.border_style(true))
                .title(title.to_string())
                .title_alignment(Alignment::Center),
        )
        .style(theme.base())
        .alignment(Alignment::Left);

    f.render_widget(paragraph, dialog_area);

    if lines.len() > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(Style::default().fg(theme.border))
            .thumb_style(Style::default().fg(theme.highlight));

        f.render_stateful_widget(scrollbar, dialog_area, &mut scroll.scrollbar_state);
    }
}
