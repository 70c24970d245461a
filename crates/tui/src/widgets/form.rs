use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::styles::{error_text, focused, hint_text};

/// A single line text input
pub struct Field {
    label: &'static str,
    value: String,
    masked: bool,
}

impl Field {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            masked: false,
        }
    }

    /// Show `*`s instead of what's typed
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    fn display(&self) -> String {
        if self.masked {
            "*".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

/// What a key press meant to the form
#[derive(Debug, PartialEq, Eq)]
pub enum FormEvent {
    None,
    Submit,
    Cancel,
}

/// A titled stack of fields, one of which has focus
pub struct Form {
    title: &'static str,
    fields: Vec<Field>,
    focused: usize,
    error: Option<String>,
}

impl Form {
    pub fn new(title: &'static str, fields: Vec<Field>) -> Self {
        Self {
            title,
            fields,
            focused: 0,
            error: None,
        }
    }

    pub fn value(&self, idx: usize) -> &str {
        &self.fields[idx].value
    }

    /// Show a problem under the fields, until the next key press
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormEvent {
        self.error = None;
        match key.code {
            KeyCode::Enter => return FormEvent::Submit,
            KeyCode::Esc => return FormEvent::Cancel,
            KeyCode::Tab | KeyCode::Down => self.focused = (self.focused + 1) % self.fields.len(),
            KeyCode::BackTab | KeyCode::Up => {
                self.focused = (self.focused + self.fields.len() - 1) % self.fields.len()
            }
            KeyCode::Backspace => {
                self.fields[self.focused].value.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.fields[self.focused].value.push(c);
            }
            _ => (),
        };

        FormEvent::None
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect, hint: &'static str) {
        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .title_alignment(Alignment::Center);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut constraints = vec![Constraint::Length(3); self.fields.len()];
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Min(0));
        let layout = Layout::new(Direction::Vertical, constraints).split(inner);

        for (i, field) in self.fields.iter().enumerate() {
            let mut block = Block::default().title(field.label).borders(Borders::ALL);
            if i == self.focused {
                block = block.border_style(focused());
            }
            frame.render_widget(Paragraph::new(field.display()).block(block), layout[i]);
        }

        let n = self.fields.len();
        if let Some(e) = &self.error {
            frame.render_widget(Paragraph::new(error_text(e.clone())), layout[n]);
        }
        frame.render_widget(Paragraph::new(hint_text(hint)), layout[n + 1]);

        // Put the cursor at the end of the focused field
        let target = layout[self.focused];
        let x = target.x + 1 + self.fields[self.focused].display().chars().count() as u16;
        frame.set_cursor(x.min(target.right().saturating_sub(2)), target.y + 1);
    }
}
