use super::common::{self, shortcuts};
use crate::ui::core::{ClearScope, ViewContext};
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

/// Single-field dialog used for both adding and editing a todo.
pub fn render_todo_input_dialog(
    f: &mut Frame,
    area: Rect,
    ctx: &ViewContext,
    title: &str,
    input_buffer: &str,
    cursor_position: usize,
) {
    let theme = &ctx.theme;
    let width = LayoutManager::dialog_width_percent(area.width);
    let dialog_area = LayoutManager::centered_rect_lines(width, 9, area);
    f.render_widget(Clear, dialog_area);

    let title = format!(" {} ", title);
    let main_block = common::create_dialog_block(&title, theme.highlight, theme);
    let inner_area = main_block.inner(dialog_area);
    f.render_widget(main_block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // input field
            Constraint::Length(1), // spacer
            Constraint::Length(1), // instructions
        ])
        .split(inner_area);

    let input = common::create_input_paragraph(input_buffer, cursor_position, "Title", theme);
    f.render_widget(input, chunks[0]);

    let instructions = common::create_instructions_paragraph(
        &[
            shortcuts::enter_save(theme),
            shortcuts::separator(theme),
            shortcuts::esc_cancel(theme),
        ],
        theme,
    );
    f.render_widget(instructions, chunks[2]);
}

pub fn render_clear_confirmation_dialog(f: &mut Frame, area: Rect, ctx: &ViewContext, scope: ClearScope, count: usize) {
    let theme = &ctx.theme;
    let width = LayoutManager::dialog_width_percent(area.width);
    let dialog_area = LayoutManager::centered_rect_lines(width, 8, area);
    f.render_widget(Clear, dialog_area);

    let title = format!(" {} Confirm ", ctx.icons.warning());
    let main_block = common::create_dialog_block(&title, theme.danger, theme);
    let inner_area = main_block.inner(dialog_area);
    f.render_widget(main_block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner_area);

    let noun = if count == 1 { "todo" } else { "todos" };
    let message = Paragraph::new(vec![
        Line::from(format!("Clear {}?", scope.describe())),
        Line::from(Span::styled(
            format!("{} {} will be removed.", count, noun),
            theme.dim().add_modifier(Modifier::ITALIC),
        )),
    ])
    .style(theme.base())
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(message, chunks[0]);

    let instructions = common::create_instructions_paragraph(
        &[
            shortcuts::enter_confirm(theme),
            shortcuts::separator(theme),
            shortcuts::esc_cancel(theme),
        ],
        theme,
    );
    f.render_widget(instructions, chunks[1]);
}
