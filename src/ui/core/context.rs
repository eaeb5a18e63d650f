use crate::{config::DisplayConfig, icons::IconService, ui::theme::Theme};

/// Read-only data shared by components while rendering a frame.
pub struct ViewContext {
    pub theme: Theme,
    pub icons: IconService,
    pub display: DisplayConfig,
}

impl ViewContext {
    pub fn new(dark_mode: bool, icons: IconService, display: DisplayConfig) -> Self {
        Self {
            theme: Theme::for_mode(dark_mode),
            icons,
            display,
        }
    }
}

impl Default for ViewContext {
    fn default() -> Self {
        Self::new(false, IconService::default(), DisplayConfig::default())
    }
}
