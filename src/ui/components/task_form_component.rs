//! Modal create/edit form over [`TaskForm`].
//!
//! The draft itself lives in the board's `TaskForm`; this component only adds
//! the terminal concerns: which field has focus, the pending tag text and the
//! "title is required" hint.

use crate::board::TaskForm;
use crate::constants::{
    FORM_SUBMIT_CREATE, FORM_SUBMIT_EDIT, FORM_TITLE_CREATE, FORM_TITLE_EDIT, FORM_TITLE_REQUIRED,
};
use crate::ui::components::dialogs::common::{
    create_dialog_block, create_input_paragraph, create_instructions_paragraph, create_selection_paragraph, shortcuts,
};
use crate::ui::core::{actions::Action, ViewContext};
use crate::ui::layout::LayoutManager;
use crate::utils::datetime::{format_date, format_relative_date};
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

/// Form fields in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Description,
    Status,
    Priority,
    Assignee,
    DueDate,
    Tags,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::Title,
        FormField::Description,
        FormField::Status,
        FormField::Priority,
        FormField::Assignee,
        FormField::DueDate,
        FormField::Tags,
    ];

    fn position(self) -> usize {
        Self::ALL.iter().position(|field| *field == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Default)]
pub struct TaskFormComponent {
    pub focus: FormField,
    pub tag_input: String,
    pub title_required: bool,
    area: Rect,
}

impl TaskFormComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget per-session state; called whenever the form is (re)opened
    pub fn reset(&mut self) {
        self.focus = FormField::Title;
        self.tag_input.clear();
        self.title_required = false;
    }

    /// Route a key to the open form. Returns the intent for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent, form: &mut TaskForm, today: NaiveDate) -> Action {
        match key.code {
            KeyCode::Esc => return Action::CloseForm,
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => return self.submit(form),
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                return Action::None;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.previous();
                return Action::None;
            }
            KeyCode::Enter => {
                if self.focus == FormField::Tags && !self.tag_input.trim().is_empty() {
                    if form.add_tag(&self.tag_input) {
                        self.tag_input.clear();
                    }
                    return Action::None;
                }
                return self.submit(form);
            }
            _ => {}
        }

        match self.focus {
            FormField::Title => {
                edit_text(&mut form.draft_mut().title, key);
                if !form.draft().title.trim().is_empty() {
                    self.title_required = false;
                }
            }
            FormField::Description => edit_text(&mut form.draft_mut().description, key),
            FormField::Assignee => edit_text(&mut form.draft_mut().assignee, key),
            FormField::Status => match key.code {
                KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('l') => form.cycle_status(true),
                KeyCode::Left | KeyCode::Char('h') => form.cycle_status(false),
                _ => {}
            },
            FormField::Priority => match key.code {
                KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('l') => form.cycle_priority(true),
                KeyCode::Left | KeyCode::Char('h') => form.cycle_priority(false),
                _ => {}
            },
            FormField::DueDate => match key.code {
                KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('l') => form.shift_due_date(1, today),
                KeyCode::Left | KeyCode::Char('-') | KeyCode::Char('h') => form.shift_due_date(-1, today),
                KeyCode::PageDown => form.shift_due_date(7, today),
                KeyCode::PageUp => form.shift_due_date(-7, today),
                KeyCode::Char('t') => form.set_due_today(today),
                KeyCode::Backspace | KeyCode::Delete => form.clear_due_date(),
                _ => {}
            },
            FormField::Tags => match key.code {
                KeyCode::Backspace if self.tag_input.is_empty() => {
                    if let Some(last) = form.draft().tags.last().cloned() {
                        form.remove_tag(&last);
                    }
                }
                _ => edit_text(&mut self.tag_input, key),
            },
        }

        Action::None
    }

    /// Clicking outside the modal dismisses it
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if !LayoutManager::contains(self.area, mouse.column, mouse.row) => {
                Action::CloseForm
            }
            _ => Action::None,
        }
    }

    fn submit(&mut self, form: &TaskForm) -> Action {
        self.title_required = form.draft().title.trim().is_empty();
        Action::SubmitForm
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, form: &TaskForm, ctx: &ViewContext) {
        let palette = &ctx.palette;
        let draft = form.draft();
        let editing = form.editing().is_some();

        let dialog_area = LayoutManager::centered_rect_lines(70, 24, area);
        self.area = dialog_area;
        f.render_widget(Clear, dialog_area);

        let title = if editing {
            format!(" {FORM_TITLE_EDIT} ")
        } else {
            format!(" {} {FORM_TITLE_CREATE} ", ctx.icons.add())
        };
        let block = create_dialog_block(&title, palette.primary, palette);
        let inner = block.inner(dialog_area);
        f.render_widget(block, dialog_area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // title
                Constraint::Length(3), // description
                Constraint::Length(3), // status + priority
                Constraint::Length(3), // assignee + due date
                Constraint::Length(3), // tag input
                Constraint::Length(2), // tag chips
                Constraint::Length(1), // validation
                Constraint::Length(1), // submit hint
                Constraint::Min(0),
                Constraint::Length(1), // instructions
            ])
            .split(inner);

        let halves = |row: Rect| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(row)
        };

        f.render_widget(
            create_input_paragraph(&draft.title, "Title *", self.focus == FormField::Title, palette),
            rows[0],
        );
        f.render_widget(
            create_input_paragraph(
                &draft.description,
                "Description",
                self.focus == FormField::Description,
                palette,
            ),
            rows[1],
        );

        let selects = halves(rows[2]);
        f.render_widget(
            create_selection_paragraph(
                format!("{} {}", ctx.icons.lane(draft.status), draft.status.label()),
                "Status",
                self.focus == FormField::Status,
                palette,
            ),
            selects[0],
        );
        f.render_widget(
            create_selection_paragraph(
                format!("{} {}", ctx.icons.priority(draft.priority), draft.priority.label()),
                "Priority",
                self.focus == FormField::Priority,
                palette,
            ),
            selects[1],
        );

        let people = halves(rows[3]);
        f.render_widget(
            create_input_paragraph(&draft.assignee, "Assignee", self.focus == FormField::Assignee, palette),
            people[0],
        );
        let due_label = match draft.due_date {
            Some(date) => format!(
                "{} {} ({})",
                ctx.icons.due_date(),
                format_date(date, &ctx.display.date_format),
                format_relative_date(date, ctx.today(), &ctx.display.date_format)
            ),
            None => "Pick a date".to_string(),
        };
        f.render_widget(
            create_selection_paragraph(due_label, "Due Date", self.focus == FormField::DueDate, palette),
            people[1],
        );

        f.render_widget(
            create_input_paragraph(&self.tag_input, "Add tag (Enter)", self.focus == FormField::Tags, palette),
            rows[4],
        );

        let chips: Vec<Span> = draft
            .tags
            .iter()
            .flat_map(|tag| {
                [
                    Span::styled(
                        format!("#{tag}"),
                        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                ]
            })
            .collect();
        f.render_widget(
            Paragraph::new(Line::from(chips)).wrap(ratatui::widgets::Wrap { trim: true }),
            rows[5],
        );

        if self.title_required {
            f.render_widget(
                Paragraph::new(FORM_TITLE_REQUIRED).style(Style::default().fg(palette.destructive)),
                rows[6],
            );
        }

        let submit_label = if editing { FORM_SUBMIT_EDIT } else { FORM_SUBMIT_CREATE };
        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Enter", Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)),
                Span::styled(submit_label, Style::default().fg(palette.foreground)),
            ])),
            rows[7],
        );

        let instructions = [
            shortcuts::TAB_NEXT,
            shortcuts::SEPARATOR,
            shortcuts::ARROWS_CHANGE,
            shortcuts::SEPARATOR,
            shortcuts::CTRL_S_SAVE,
            shortcuts::SEPARATOR,
            shortcuts::ESC_CANCEL,
        ];
        f.render_widget(create_instructions_paragraph(&instructions, palette), rows[9]);
    }
}

/// Basic line editing shared by the text fields
fn edit_text(buffer: &mut String, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            buffer.push(c);
        }
        KeyCode::Backspace => {
            buffer.pop();
        }
        _ => {}
    }
}
