//! Reusable UI components

pub mod badge;

// Component architecture
pub mod board_component;
pub mod dialog_component;
pub mod dialogs;
pub mod header_component;
pub mod lane_component;
pub mod stats_component;
pub mod status_bar;
pub mod task_card_component;
pub mod task_form_component;

// Component exports
pub use board_component::BoardComponent;
pub use dialog_component::DialogComponent;
pub use header_component::HeaderComponent;
pub use lane_component::LaneComponent;
pub use stats_component::StatsComponent;
pub use status_bar::StatusBar;
pub use task_card_component::TaskCardComponent;
pub use task_form_component::TaskFormComponent;
