use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{prelude::Rect, Frame};

use super::{Action, Screen};
use crate::{
    shell::{Route, Shell},
    widgets::{Field, Form, FormEvent},
};

pub struct LoginScreen {
    form: Form,
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self {
            form: Form::new(
                "Log in",
                vec![Field::new("Username"), Field::new("Password").masked()],
            ),
        }
    }
}

impl Screen for LoginScreen {
    fn draw(&mut self, _: &Shell, frame: &mut Frame, area: Rect) {
        self.form.draw(
            frame,
            area,
            "Enter: log in | Tab: next field | Ctrl-R: register | Esc: quit",
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('r') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Go(Route::Register);
        }

        match self.form.handle_key(key) {
            FormEvent::Submit => Action::Login {
                username: self.form.value(0).to_string(),
                password: self.form.value(1).to_string(),
            },
            FormEvent::Cancel => Action::Exit,
            FormEvent::None => Action::None,
        }
    }
}
