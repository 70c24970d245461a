use course_client::Course;
use crossterm::event::KeyEvent;
use ratatui::{prelude::Rect, Frame};

use super::{Action, Screen};
use crate::{
    shell::{Route, Shell},
    widgets::{Field, Form, FormEvent},
};

pub struct NewCourseScreen {
    form: Form,
}

impl Default for NewCourseScreen {
    fn default() -> Self {
        Self {
            form: Form::new(
                "New course",
                vec![
                    Field::new("Title"),
                    Field::new("Description (optional)"),
                    Field::new("Instructor"),
                    Field::new("Duration (hours)"),
                    Field::new("Enrollment limit (optional)"),
                ],
            ),
        }
    }
}

impl NewCourseScreen {
    fn course(&self) -> Result<Course, String> {
        let duration = self
            .form
            .value(3)
            .trim()
            .parse()
            .map_err(|_| "Duration must be a whole number of hours".to_string())?;
        let enrollment_limit = match self.form.value(4).trim() {
            "" => None,
            l => Some(
                l.parse()
                    .map_err(|_| "Enrollment limit must be a whole number".to_string())?,
            ),
        };
        let description = Some(self.form.value(1).to_string()).filter(|d| !d.is_empty());

        Ok(Course {
            id: None,
            title: self.form.value(0).to_string(),
            description,
            instructor: self.form.value(2).to_string(),
            duration,
            enrollment_limit,
        })
    }
}

impl Screen for NewCourseScreen {
    fn draw(&mut self, _: &Shell, frame: &mut Frame, area: Rect) {
        self.form.draw(
            frame,
            area,
            "Enter: create | Tab: next field | Esc: back to courses",
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match self.form.handle_key(key) {
            FormEvent::Submit => match self.course() {
                Ok(course) => Action::CreateCourse(course),
                Err(e) => {
                    self.form.set_error(e);
                    Action::None
                }
            },
            FormEvent::Cancel => Action::Go(Route::Courses),
            FormEvent::None => Action::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use pretty_assertions::assert_eq;

    fn fill(screen: &mut NewCourseScreen, values: [&str; 5]) {
        for (i, v) in values.iter().enumerate() {
            for c in v.chars() {
                screen.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
            }
            if i < values.len() - 1 {
                screen.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
            }
        }
    }

    fn submit(screen: &mut NewCourseScreen) -> Action {
        screen.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
    }

    #[test]
    fn test_full_course() {
        let mut screen = NewCourseScreen::default();
        fill(&mut screen, ["Rust", "Systems", "Ferris", "40", "25"]);

        assert_eq!(
            submit(&mut screen),
            Action::CreateCourse(Course {
                id: None,
                title: "Rust".to_string(),
                description: Some("Systems".to_string()),
                instructor: "Ferris".to_string(),
                duration: 40,
                enrollment_limit: Some(25),
            })
        );
    }

    #[test]
    fn test_optional_fields() {
        let mut screen = NewCourseScreen::default();
        fill(&mut screen, ["Rust", "", "Ferris", "40", ""]);

        match submit(&mut screen) {
            Action::CreateCourse(c) => {
                assert_eq!(c.description, None);
                assert_eq!(c.enrollment_limit, None);
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_bad_duration_is_not_sent() {
        let mut screen = NewCourseScreen::default();
        fill(&mut screen, ["Rust", "", "Ferris", "forty", ""]);

        assert_eq!(submit(&mut screen), Action::None);
    }
}
