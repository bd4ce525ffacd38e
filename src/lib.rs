//! Taskboard - A kanban task dashboard for the terminal
//!
//! This library provides a four-lane kanban board (To Do, In Progress, Done,
//! Completed) with drag-and-drop reassignment, a create/edit form, summary
//! statistics and a persisted light/dark theme, rendered with Ratatui.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`board`] - Task model, store, drag controller, form and dashboard
//! * [`config`] - Application configuration management
//! * [`theme`] - Light/dark preference and color palettes
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Kanban board domain: tasks, store, drag-and-drop and the task form
pub mod board;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging setup and the in-memory log buffer
pub mod logger;

/// Light/dark theme preference and persistence
pub mod theme;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date handling
pub mod utils;

// Re-export the board types for convenient access
pub use board::{Dashboard, Priority, Status, Task, TaskDraft, TaskId};
