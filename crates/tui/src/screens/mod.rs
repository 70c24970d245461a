use course_client::Course;
use crossterm::event::KeyEvent;
use ratatui::{prelude::Rect, Frame};

use crate::shell::{Route, Shell};

mod courses;
mod login;
mod new_course;
mod register;

pub use courses::CoursesScreen;
pub use login::LoginScreen;
pub use new_course::NewCourseScreen;
pub use register::RegisterScreen;

/// Something a screen wants the app to do
#[derive(Debug, PartialEq)]
pub enum Action {
    /// Do nothing
    None,

    /// Quit the application
    Exit,

    Login {
        username: String,
        password: String,
    },

    Register {
        username: String,
        password: String,
        role: String,
    },

    CreateCourse(Course),

    /// Fetch the course list again
    Refresh,

    Logout,

    /// Switch to another screen
    Go(Route),
}

pub trait Screen {
    fn draw(&mut self, shell: &Shell, frame: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyEvent) -> Action;
}

/// A fresh screen for `route`
pub fn for_route(route: Route) -> Box<dyn Screen> {
    match route {
        Route::Login => Box::<LoginScreen>::default(),
        Route::Register => Box::<RegisterScreen>::default(),
        Route::Courses => Box::<CoursesScreen>::default(),
        Route::NewCourse => Box::<NewCourseScreen>::default(),
    }
}
