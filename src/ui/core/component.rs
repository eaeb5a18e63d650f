use super::actions::Action;
use super::context::ViewContext;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::{layout::Rect, Frame};

pub trait Component {
    fn handle_events(&mut self, event: Option<Event>) -> Action {
        match event {
            Some(Event::Key(key)) if key.kind == KeyEventKind::Press => self.handle_key_events(key),
            _ => Action::None,
        }
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    fn update(&mut self, action: Action) -> Action {
        // Default implementation passes action through
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &ViewContext);
}
