//! The client's view of the terminal: notices, navigation and page containers.
use std::collections::{HashMap, VecDeque};

use course_client::{Navigator, Page, COURSES_PATH, LOGIN_PATH};
use log::{debug, warn};

/// Paths the app knows how to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Courses,
    NewCourse,
}

impl Route {
    pub fn from_path(path: &str) -> Option<Route> {
        match path {
            LOGIN_PATH => Some(Route::Login),
            "/register" => Some(Route::Register),
            COURSES_PATH => Some(Route::Courses),
            "/courses/new" => Some(Route::NewCourse),
            _ => None,
        }
    }
}

/// Collects what the client asks of the UI, for the app to act on once the call returns
#[derive(Debug, Default)]
pub struct Shell {
    notices: VecDeque<String>,
    navigations: VecDeque<Route>,
    containers: HashMap<String, String>,
}

impl Shell {
    /// The oldest notice not yet dismissed
    pub fn notice(&self) -> Option<&str> {
        self.notices.front().map(String::as_str)
    }

    pub fn dismiss_notice(&mut self) {
        self.notices.pop_front();
    }

    /// Take the next requested route change, if any
    pub fn take_navigation(&mut self) -> Option<Route> {
        self.navigations.pop_front()
    }

    /// Current contents of the container `id`
    pub fn contents(&self, id: &str) -> Option<&str> {
        self.containers.get(id).map(String::as_str)
    }

    pub fn clear(&mut self, id: &str) {
        self.containers.remove(id);
    }
}

impl Navigator for Shell {
    fn alert(&mut self, message: &str) {
        debug!("notice: {}", message);
        self.notices.push_back(message.to_string());
    }

    fn navigate(&mut self, path: &str) {
        match Route::from_path(path) {
            Some(route) => self.navigations.push_back(route),
            None => warn!("ignoring navigation to unknown path {}", path),
        }
    }
}

impl Page for Shell {
    fn replace_contents(&mut self, container_id: &str, html: String) {
        self.containers.insert(container_id.to_string(), html);
    }
}
