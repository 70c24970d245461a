use crossterm::event::KeyEvent;
use ratatui::{prelude::Rect, Frame};

use super::{Action, Screen};
use crate::{
    shell::{Route, Shell},
    widgets::{Field, Form, FormEvent},
};

pub struct RegisterScreen {
    form: Form,
}

impl Default for RegisterScreen {
    fn default() -> Self {
        Self {
            form: Form::new(
                "Register",
                vec![
                    Field::new("Username"),
                    Field::new("Password").masked(),
                    Field::new("Role (admin, editor or user)").with_value("user"),
                ],
            ),
        }
    }
}

impl Screen for RegisterScreen {
    fn draw(&mut self, _: &Shell, frame: &mut Frame, area: Rect) {
        self.form.draw(
            frame,
            area,
            "Enter: register | Tab: next field | Esc: back to log in",
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match self.form.handle_key(key) {
            FormEvent::Submit => Action::Register {
                username: self.form.value(0).to_string(),
                password: self.form.value(1).to_string(),
                role: self.form.value(2).to_string(),
            },
            FormEvent::Cancel => Action::Go(Route::Login),
            FormEvent::None => Action::None,
        }
    }
}
