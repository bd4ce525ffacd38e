use crate::board::{Status, TaskId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    NextTask,
    PreviousTask,
    NextLane,
    PreviousLane,

    // Form
    OpenNewTask,
    OpenTask(TaskId),
    SubmitForm,
    CloseForm,

    // Drag and drop
    BeginDrag(TaskId),
    DropOnLane(Status),
    CancelDrag,

    // Appearance
    ToggleTheme,
    CycleIcons,

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogType {
    Help,
    Logs,
}
