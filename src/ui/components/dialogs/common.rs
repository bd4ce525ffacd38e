use crate::theme::Palette;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Creates a styled main dialog block
pub fn create_dialog_block<'a>(title: &'a str, theme_color: Color, palette: &Palette) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(theme_color))
        .style(Style::default().fg(palette.foreground).bg(palette.background))
}

fn field_block(field_title: &str, focused: bool, palette: &Palette) -> Block<'static> {
    let border = if focused { palette.selection } else { palette.border };
    Block::default()
        .borders(Borders::ALL)
        .border_type(if focused { BorderType::Thick } else { BorderType::Rounded })
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(palette.foreground))
        .border_style(Style::default().fg(border))
}

/// Creates an input field block with a visual cursor when focused
pub fn create_input_paragraph(
    input_buffer: &str,
    field_title: &str,
    focused: bool,
    palette: &Palette,
) -> Paragraph<'static> {
    let cursor_char = if focused { "█" } else { "" };
    let input_display = format!("{}{}", input_buffer, cursor_char);

    Paragraph::new(input_display)
        .block(field_block(field_title, focused, palette))
        .style(Style::default().fg(palette.foreground))
}

/// Creates a selection field block (value changed with arrow keys)
pub fn create_selection_paragraph(
    value: String,
    field_title: &str,
    focused: bool,
    palette: &Palette,
) -> Paragraph<'static> {
    let display = if focused { format!("◂ {value} ▸") } else { value };
    Paragraph::new(display)
        .block(field_block(field_title, focused, palette))
        .style(Style::default().fg(palette.foreground))
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut], palette: &Palette) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(palette.muted)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across dialogs
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const ESC_CLOSE: InstructionShortcut = ("Esc", Color::Red, " Close");
    pub const TAB_NEXT: InstructionShortcut = ("Tab", Color::Cyan, " Next field");
    pub const ARROWS_CHANGE: InstructionShortcut = ("←/→", Color::Cyan, " Change");
    pub const CTRL_S_SAVE: InstructionShortcut = ("Ctrl+S", Color::Green, " Save");
    pub const SCROLL: InstructionShortcut = ("j/k", Color::Yellow, " Scroll");
}
