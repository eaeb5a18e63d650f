use crate::config::Config;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::store::{AppStore, NotificationKind, SubscriptionId, TodoId};
use crate::ui::components::{Banner, DialogComponent, StatusBar, Toast, TodoPanelComponent};
use crate::ui::core::{
    actions::{Action, ClearScope, DialogType, PanelKind},
    event_handler::EventType,
    Component, NotificationTimer, ViewContext,
};
use crate::ui::layout::LayoutManager;
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, info};
use ratatui::{layout::Rect, widgets::Block, Frame};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

pub struct AppComponent {
    // Component composition
    active_panel: TodoPanelComponent,
    done_panel: TodoPanelComponent,
    dialog: DialogComponent,
    focused: PanelKind,

    // Application state
    store: AppStore,
    ctx: ViewContext,
    two_column_min_width: u16,

    // Services
    notification_timer: NotificationTimer,
    timer_subscription: SubscriptionId,
    store_subscriptions: (SubscriptionId, SubscriptionId),
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,

    // Set by store subscribers, cleared when panels are refreshed
    store_changed: Arc<AtomicBool>,
    should_quit: bool,
}

impl AppComponent {
    /// Must be called inside a tokio runtime for the notification timer to arm.
    pub fn new(config: &Config, logger: Logger) -> Self {
        let mut store = AppStore::new(config.initial_ui_state());
        let (action_tx, background_action_rx) = mpsc::unbounded_channel();

        let notification_timer = NotificationTimer::new(config.notifications.timeout(), action_tx);
        let timer_subscription = notification_timer.attach(&mut store);

        let store_changed = Arc::new(AtomicBool::new(true));
        let todos_flag = Arc::clone(&store_changed);
        let ui_flag = Arc::clone(&store_changed);
        let store_subscriptions = (
            store.subscribe_todos(move |_| todos_flag.store(true, Ordering::Relaxed)),
            store.subscribe_ui(move |_| ui_flag.store(true, Ordering::Relaxed)),
        );

        let ctx = ViewContext::new(
            config.ui.dark_mode,
            IconService::new(config.ui.icon_theme),
            config.display.clone(),
        );

        let mut app = Self {
            active_panel: TodoPanelComponent::new(PanelKind::Active),
            done_panel: TodoPanelComponent::new(PanelKind::Done),
            dialog: DialogComponent::new(),
            focused: PanelKind::Active,
            store,
            ctx,
            two_column_min_width: config.ui.two_column_min_width,
            notification_timer,
            timer_subscription,
            store_subscriptions,
            background_action_rx,
            logger,
            store_changed,
            should_quit: false,
        };
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn store(&self) -> &AppStore {
        &self.store
    }

    pub fn focused_panel(&self) -> PanelKind {
        self.focused
    }

    pub fn is_dialog_visible(&self) -> bool {
        self.dialog.is_visible()
    }

    pub fn icons(&self) -> &IconService {
        &self.ctx.icons
    }

    fn focused_panel_mut(&mut self) -> &mut TodoPanelComponent {
        match self.focused {
            PanelKind::Active => &mut self.active_panel,
            PanelKind::Done => &mut self.done_panel,
        }
    }

    /// Refresh panel snapshots and theme after store changes
    fn sync_component_data(&mut self) {
        if !self.store_changed.swap(false, Ordering::Relaxed) {
            return;
        }

        self.active_panel
            .update_data(self.store.active().into_iter().cloned().collect());
        self.done_panel
            .update_data(self.store.done().into_iter().cloned().collect());

        let dark_mode = self.store.ui().dark_mode;
        if self.ctx.theme.dark != dark_mode {
            self.ctx.theme = Theme::for_mode(dark_mode);
        }
    }

    fn set_focus(&mut self, panel: PanelKind) {
        self.focused = panel;
        self.active_panel.focused = panel == PanelKind::Active;
        self.done_panel.focused = panel == PanelKind::Done;
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('a') => Action::ShowDialog(DialogType::TodoCreation),
            KeyCode::Char('X') if !self.store.todos().is_empty() => {
                Action::ShowDialog(DialogType::ClearConfirmation(ClearScope::All))
            }
            KeyCode::Char('t') => Action::ToggleDarkMode,
            KeyCode::Char('i') => Action::CycleIconTheme,
            KeyCode::Char('x') => Action::DismissBanner,
            KeyCode::Tab | KeyCode::BackTab => Action::SwitchPanel,
            _ => Action::None,
        }
    }

    fn route_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        match self.focused_panel_mut().handle_key_events(key) {
            Action::None => self.handle_global_key(key),
            action => action,
        }
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };
        self.dispatch(action);
    }

    /// Run an action through the dialog, then the store, then refresh views.
    pub fn dispatch(&mut self, action: Action) -> Action {
        let action = self.update(action);
        let result = self.handle_app_action(action);
        self.sync_component_data();
        result
    }

    /// Let the dialog consume show/hide actions before app-level handling
    pub fn update(&mut self, action: Action) -> Action {
        self.dialog.update(action)
    }

    /// Translate an action into store intents. Returns `Action::Quit` when the
    /// app should exit, `Action::None` otherwise.
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                info!("Quit requested");
                self.should_quit = true;
                Action::Quit
            }
            Action::SwitchPanel => {
                self.set_focus(self.focused.other());
                Action::None
            }
            Action::AddTodo(title) => {
                if let Some(id) = self.store.add_todo(&title) {
                    let stored = self.title_of(id);
                    info!("Added todo {}", id);
                    self.store.show_notif(NotificationKind::Add, stored.as_deref(), None);
                    self.sync_component_data();
                    self.set_focus(PanelKind::Active);
                    self.active_panel.select_id(id);
                }
                Action::None
            }
            Action::ToggleTodo(id) => {
                if self.store.toggle_todo(id) {
                    info!("Toggled todo {}", id);
                }
                Action::None
            }
            Action::RemoveTodo(id) => {
                let title = self.title_of(id);
                if self.store.remove_todo(id) {
                    info!("Removed todo {}", id);
                    self.store.show_notif(NotificationKind::Delete, title.as_deref(), None);
                }
                Action::None
            }
            Action::EditTodo { id, title } => {
                if self.store.edit_todo(id, &title) {
                    let stored = self.title_of(id);
                    info!("Edited todo {}", id);
                    self.store.show_notif(NotificationKind::Edit, stored.as_deref(), None);
                }
                Action::None
            }
            Action::ClearTodos(scope) => {
                let changed = match scope {
                    ClearScope::All => self.store.clear_todos(),
                    ClearScope::Active => self.store.clear_active_todos(),
                    ClearScope::Done => self.store.clear_done_todos(),
                };
                if changed {
                    info!("Cleared {}", scope.describe());
                    let message = format!("Cleared {}", scope.describe());
                    self.store.show_notif(NotificationKind::Clear, None, Some(&message));
                }
                Action::None
            }
            Action::ToggleDarkMode => {
                self.store.toggle_dark_mode();
                Action::None
            }
            Action::CycleIconTheme => {
                self.ctx.icons.cycle_icon_theme();
                debug!("Icon theme is now {:?}", self.ctx.icons.theme());
                Action::None
            }
            Action::DismissBanner => {
                self.store.dismiss_banner();
                Action::None
            }
            Action::HideNotification(generation) => {
                let notif = &self.store.ui().notif;
                if notif.visible && notif.generation == generation {
                    self.store.hide_notif();
                } else {
                    debug!("Ignoring stale hide for generation {}", generation);
                }
                Action::None
            }
            Action::ShowDialog(_) | Action::HideDialog | Action::None => Action::None,
        }
    }

    fn title_of(&self, id: TodoId) -> Option<String> {
        self.store.todos().get(id).map(|item| item.title.clone())
    }

    /// Drain actions sent by background tasks (the notification timer)
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = self.background_action_rx.try_recv() {
            debug!("Background: received action {:?}", action);
            actions.push(action);
        }
        actions
    }

    pub fn render(&mut self, f: &mut Frame, rect: Rect) {
        let ui = self.store.ui();
        let counts = self.store.todos().counts();

        f.render_widget(Block::default().style(self.ctx.theme.base()), rect);

        let areas = LayoutManager::main_layout(rect, ui.show_banner);
        if let Some(banner_area) = areas.banner {
            Banner::render(f, banner_area, &self.ctx);
        }

        let columns = LayoutManager::column_count(rect.width, self.two_column_min_width);
        let (active_area, done_area) = LayoutManager::panel_layout(areas.panels, columns);
        self.active_panel.render(f, active_area, &self.ctx);
        self.done_panel.render(f, done_area, &self.ctx);

        Toast::render(f, areas.panels, &ui.notif, &self.ctx);
        StatusBar::render(f, areas.status, counts, ui.dark_mode, &self.ctx);

        if self.dialog.is_visible() {
            self.dialog.update_data(self.logger.get_logs(), counts);
            self.dialog.render(f, rect, &self.ctx);
        }
    }
}

impl Drop for AppComponent {
    fn drop(&mut self) {
        self.notification_timer
            .detach(&mut self.store, self.timer_subscription);
        self.store.unsubscribe_todos(self.store_subscriptions.0);
        self.store.unsubscribe_ui(self.store_subscriptions.1);
    }
}
