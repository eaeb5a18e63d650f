//! Layout management and calculations

use crate::constants::{BANNER_HEIGHT, TOAST_HEIGHT};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen areas for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainAreas {
    pub banner: Option<Rect>,
    pub panels: Rect,
    pub status: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Number of panel columns for a given terminal width
    #[must_use]
    pub fn column_count(width: u16, two_column_min_width: u16) -> u16 {
        if width >= two_column_min_width {
            2
        } else {
            1
        }
    }

    /// Split the screen into banner (optional), panels and a one-line status bar
    #[must_use]
    pub fn main_layout(area: Rect, show_banner: bool) -> MainAreas {
        let banner_height = if show_banner && area.height > BANNER_HEIGHT + 4 {
            BANNER_HEIGHT
        } else {
            0
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(banner_height),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        MainAreas {
            banner: (banner_height > 0).then_some(chunks[0]),
            panels: chunks[1],
            status: chunks[2],
        }
    }

    /// Place the Active and Done panels side by side or stacked
    #[must_use]
    pub fn panel_layout(area: Rect, columns: u16) -> (Rect, Rect) {
        let direction = if columns >= 2 {
            Direction::Horizontal
        } else {
            Direction::Vertical
        };

        let chunks = Layout::default()
            .direction(direction)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        (chunks[0], chunks[1])
    }

    /// Toast area along the bottom edge of the panel area
    #[must_use]
    pub fn toast_area(area: Rect, text_width: u16) -> Rect {
        let width = text_width.saturating_add(4).min(area.width).max(area.width.min(24));
        let height = TOAST_HEIGHT.min(area.height);
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + area.height.saturating_sub(height + 1);
        Rect::new(x, y, width, height)
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Dialog width percentage, wider on narrow terminals
    #[must_use]
    pub fn dialog_width_percent(screen_width: u16) -> u16 {
        if screen_width < 60 {
            90
        } else if screen_width < 100 {
            70
        } else {
            50
        }
    }
}
