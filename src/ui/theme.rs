use ratatui::style::{Color, Modifier, Style};

/// Color palette for one theme mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub dark: bool,
    pub background: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selection_bg: Color,
    pub done_text: Color,
    pub banner_bg: Color,
    pub banner_fg: Color,
    pub toast_bg: Color,
    pub toast_fg: Color,
    pub danger: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub fn light() -> Self {
        Theme {
            dark: false,
            background: Color::Rgb(0xFA, 0xFA, 0xF7),
            text: Color::Rgb(0x1F, 0x23, 0x28),
            text_dim: Color::Rgb(0x6A, 0x73, 0x7D),
            border: Color::Rgb(0xC9, 0xCE, 0xD4),
            border_focused: Color::Rgb(0x3A, 0x6E, 0xE8),
            highlight: Color::Rgb(0x3A, 0x6E, 0xE8),
            selection_bg: Color::Rgb(0xDD, 0xE7, 0xFB),
            done_text: Color::Rgb(0x8B, 0x94, 0x9E),
            banner_bg: Color::Rgb(0xE6, 0xF0, 0xFF),
            banner_fg: Color::Rgb(0x1D, 0x3E, 0x8A),
            toast_bg: Color::Rgb(0x24, 0x29, 0x2F),
            toast_fg: Color::Rgb(0xF6, 0xF8, 0xFA),
            danger: Color::Rgb(0xCF, 0x22, 0x2E),
            accent: Color::Rgb(0x1A, 0x7F, 0x37),
        }
    }

    pub fn dark() -> Self {
        Theme {
            dark: true,
            background: Color::Rgb(0x0D, 0x11, 0x17),
            text: Color::Rgb(0xE6, 0xED, 0xF3),
            text_dim: Color::Rgb(0x7D, 0x85, 0x90),
            border: Color::Rgb(0x30, 0x36, 0x3D),
            border_focused: Color::Rgb(0x58, 0xA6, 0xFF),
            highlight: Color::Rgb(0x58, 0xA6, 0xFF),
            selection_bg: Color::Rgb(0x16, 0x2A, 0x4A),
            done_text: Color::Rgb(0x6E, 0x76, 0x81),
            banner_bg: Color::Rgb(0x12, 0x26, 0x4A),
            banner_fg: Color::Rgb(0xC9, 0xDD, 0xFF),
            toast_bg: Color::Rgb(0xE6, 0xED, 0xF3),
            toast_fg: Color::Rgb(0x0D, 0x11, 0x17),
            danger: Color::Rgb(0xF8, 0x51, 0x49),
            accent: Color::Rgb(0x3F, 0xB9, 0x50),
        }
    }

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Base style for full-screen areas
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focused).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.border)
        }
    }

    pub fn title_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.highlight).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text_dim)
        }
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }
}
