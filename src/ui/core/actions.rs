use crate::store::TodoId;

/// Which projection a panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelKind {
    #[default]
    Active,
    Done,
}

impl PanelKind {
    pub fn other(self) -> Self {
        match self {
            Self::Active => Self::Done,
            Self::Done => Self::Active,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Done => "Done",
        }
    }
}

/// Which subset a clear confirmation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearScope {
    All,
    Active,
    Done,
}

impl ClearScope {
    pub fn describe(self) -> &'static str {
        match self {
            Self::All => "all todos",
            Self::Active => "all active todos",
            Self::Done => "all completed todos",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    SwitchPanel,

    // Todo intents
    AddTodo(String),
    ToggleTodo(TodoId),
    RemoveTodo(TodoId),
    EditTodo { id: TodoId, title: String },
    ClearTodos(ClearScope),

    // UI intents
    ToggleDarkMode,
    CycleIconTheme,
    DismissBanner,
    /// Sent by the auto-dismiss timer; carries the generation it was armed for
    HideNotification(u64),

    // Dialogs
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogType {
    TodoCreation,
    TodoEdit { id: TodoId, title: String },
    ClearConfirmation(ClearScope),
    Help,
    Logs,
}
