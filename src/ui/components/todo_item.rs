use crate::store::TodoItem;
use crate::ui::core::ViewContext;
use crate::utils::datetime::format_created_at_now;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

/// Render one todo as a list row: checkbox, title, creation stamp.
pub fn render_todo_item(item: &TodoItem, selected: bool, ctx: &ViewContext) -> ListItem<'static> {
    let theme = &ctx.theme;
    let mut line_spans = Vec::new();

    let checkbox_style = if item.done {
        Style::default().fg(theme.accent)
    } else if selected {
        Style::default().fg(theme.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text)
    };
    line_spans.push(Span::styled(format!("{} ", ctx.icons.checkbox(item.done)), checkbox_style));

    let mut title_style = if item.done {
        Style::default()
            .fg(theme.done_text)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(theme.text)
    };
    if selected {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }
    line_spans.push(Span::styled(item.title.clone(), title_style));

    if ctx.display.show_created_at {
        let stamp = format_created_at_now(item.created_at, &ctx.display.time_format, &ctx.display.date_format);
        line_spans.push(Span::raw(" "));
        line_spans.push(Span::styled(stamp, theme.dim().add_modifier(Modifier::ITALIC)));
    }

    let row = ListItem::new(Line::from(line_spans));
    if selected {
        row.style(Style::default().bg(theme.selection_bg))
    } else {
        row
    }
}
