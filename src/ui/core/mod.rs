//! Core UI functionality for the Taskboard application.
//!
//! This module contains the fundamental building blocks for the user interface:
//! event polling, the action vocabulary components speak, and the component
//! abstraction every view implements.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`context`] - Palette, icons and display settings shared by every view
//! - [`event_handler`] - Keyboard, mouse and resize input polling
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait for consistent rendering
//! 2. **Actions** are the intents components emit; only the app component
//!    turns them into board mutations
//! 3. **Events** are polled through the [`EventHandler`] on the main loop

pub mod actions;
pub mod component;
pub mod context;
pub mod event_handler;

pub use actions::{Action, DialogType};
pub use component::Component;
pub use context::ViewContext;
pub use event_handler::{EventHandler, EventType};
