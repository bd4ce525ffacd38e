use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::board::Priority;
use crate::icons::IconService;
use crate::theme::Palette;

/// Color a priority is drawn with
#[must_use]
pub fn priority_color(priority: Priority, palette: &Palette) -> Color {
    match priority {
        Priority::Urgent => palette.destructive,
        Priority::High => palette.warning,
        Priority::Medium => palette.primary,
        Priority::Low => palette.muted,
    }
}

/// Create priority badges with the themed icon
#[must_use]
pub fn create_priority_badge(priority: Priority, icons: &IconService, palette: &Palette) -> Span<'static> {
    Span::styled(
        icons.priority(priority).to_string(),
        Style::default()
            .fg(priority_color(priority, palette))
            .add_modifier(Modifier::BOLD),
    )
}

/// Tags drawn on a card and the number collapsed into the overflow badge
#[must_use]
pub fn visible_tags(tags: &[String], max: usize) -> (&[String], usize) {
    let shown = tags.len().min(max);
    (&tags[..shown], tags.len() - shown)
}

/// Create a tag badge
#[must_use]
pub fn create_tag_badge(name: &str, palette: &Palette) -> Span<'static> {
    Span::styled(
        format!("#{name}"),
        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
    )
}

/// Tag badges for a card: at most `max` tags, then a `+N` badge for the rest
#[must_use]
pub fn create_tag_badges(tags: &[String], max: usize, palette: &Palette) -> Vec<Span<'static>> {
    let (shown, hidden) = visible_tags(tags, max);
    let mut badges = Vec::new();

    for tag in shown {
        if !badges.is_empty() {
            badges.push(Span::raw(" "));
        }
        badges.push(create_tag_badge(tag, palette));
    }

    if hidden > 0 {
        badges.push(Span::raw(" "));
        badges.push(create_paren_badge(&format!("+{hidden}"), palette));
    }

    badges
}

/// Create badges with parentheses, used for counts
#[must_use]
pub fn create_paren_badge(text: &str, palette: &Palette) -> Span<'static> {
    Span::styled(format!("({text})"), Style::default().fg(palette.muted))
}

/// Small highlighted badge drawn on stat cards
#[must_use]
pub fn create_highlight_badge(text: &str, color: Color, palette: &Palette) -> Span<'static> {
    Span::styled(
        format!(" {text} "),
        Style::default()
            .fg(palette.background)
            .bg(color)
            .add_modifier(Modifier::BOLD),
    )
}
