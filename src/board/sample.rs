//! Demo tasks the board starts with unless `board.sample_data` is disabled.

use super::task::{Priority, Status, Task, TaskId};
use chrono::NaiveDate;

#[allow(clippy::too_many_arguments)]
fn sample(
    id: &str,
    title: &str,
    description: &str,
    status: Status,
    priority: Priority,
    assignee: &str,
    due: (i32, u32, u32),
    tags: &[&str],
) -> Task {
    Task {
        id: TaskId::from(id),
        title: title.to_string(),
        description: Some(description.to_string()),
        status,
        priority,
        assignee: Some(assignee.to_string()),
        due_date: NaiveDate::from_ymd_opt(due.0, due.1, due.2),
        tags: Some(tags.iter().map(|tag| (*tag).to_string()).collect()),
    }
}

#[must_use]
pub fn sample_tasks() -> Vec<Task> {
    vec![
        sample(
            "1",
            "Design System Implementation",
            "Create a comprehensive design system with reusable components and tokens for the application.",
            Status::InProgress,
            Priority::High,
            "Sarah Chen",
            (2025, 1, 15),
            &["Design", "Frontend", "UI/UX"],
        ),
        sample(
            "2",
            "User Authentication Flow",
            "Implement secure login, registration, and password reset functionality.",
            Status::Todo,
            Priority::Urgent,
            "Mike Johnson",
            (2025, 1, 10),
            &["Backend", "Security", "Auth"],
        ),
        sample(
            "3",
            "Database Migration",
            "Update database schema to support new user roles and permissions.",
            Status::Done,
            Priority::Medium,
            "Alex Rodriguez",
            (2025, 1, 8),
            &["Database", "Backend"],
        ),
        sample(
            "4",
            "Mobile Responsive Design",
            "Ensure all components work perfectly on mobile devices and tablets.",
            Status::Completed,
            Priority::Medium,
            "Emma Davis",
            (2025, 1, 5),
            &["Frontend", "Mobile", "CSS"],
        ),
        sample(
            "5",
            "API Documentation",
            "Create comprehensive API documentation for all endpoints.",
            Status::Todo,
            Priority::Low,
            "David Kim",
            (2025, 1, 20),
            &["Documentation", "API"],
        ),
    ]
}
