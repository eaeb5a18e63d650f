use crate::ui::theme::Theme;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Creates a styled main dialog block
pub fn create_dialog_block<'a>(title: &'a str, accent: Color, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(accent))
        .style(theme.base())
}

/// Creates an input field block with a visual cursor at `cursor_position` (in chars)
pub fn create_input_paragraph<'a>(
    input_buffer: &str,
    cursor_position: usize,
    field_title: &str,
    theme: &Theme,
) -> Paragraph<'a> {
    let before: String = input_buffer.chars().take(cursor_position).collect();
    let after: String = input_buffer.chars().skip(cursor_position).collect();

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(theme.text))
        .border_style(Style::default().fg(theme.border));

    let line = Line::from(vec![
        Span::raw(before),
        Span::styled("█", Style::default().fg(theme.highlight)),
        Span::raw(after),
    ]);

    Paragraph::new(line)
        .block(input_block)
        .style(Style::default().fg(theme.text))
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut], theme: &Theme) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, theme.dim()));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Instruction shortcuts shared across dialogs, colored from the active theme
pub mod shortcuts {
    use super::InstructionShortcut;
    use crate::ui::theme::Theme;

    pub fn separator(theme: &Theme) -> InstructionShortcut {
        (" • ", theme.text_dim, "")
    }

    pub fn esc_cancel(theme: &Theme) -> InstructionShortcut {
        ("Esc", theme.danger, " Cancel")
    }

    pub fn enter_save(theme: &Theme) -> InstructionShortcut {
        ("Enter", theme.accent, " Save")
    }

    pub fn enter_confirm(theme: &Theme) -> InstructionShortcut {
        ("Enter", theme.danger, " Confirm")
    }
}
