use course_client::{Client, Navigator, Storage, Transport, COURSES_PATH, COURSE_LIST_ID, LOGIN_PATH};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::debug;
use ratatui::Frame;

use crate::{
    event::Event,
    screens::{self, Action, Screen},
    shell::{Route, Shell},
    widgets::draw_notice,
};

/// Holds all application state
pub struct App<T, S> {
    pub running: bool,
    client: Client<T, S>,
    shell: Shell,
    screen: Box<dyn Screen>,
    route: Route,
}

impl<T: Transport, S: Storage> App<T, S> {
    /// Start on the course list if we already have a session, or the login screen if not
    pub fn new(client: Client<T, S>) -> Self {
        let route = if client.is_logged_in() {
            Route::Courses
        } else {
            Route::Login
        };

        let mut app = Self {
            running: true,
            client,
            shell: Shell::default(),
            screen: screens::for_route(route),
            route,
        };
        app.enter(route);
        app.settle();
        app
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    pub fn client(&self) -> &Client<T, S> {
        &self.client
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.size();
        self.screen.draw(&self.shell, frame, area);
        if let Some(notice) = self.shell.notice() {
            draw_notice(frame, area, notice);
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Resize(_, _) => (),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // C-C always exits
        if matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL)
        {
            self.quit();
            return;
        }

        // Notices block everything else until dismissed
        if self.shell.notice().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.shell.dismiss_notice();
            }
            return;
        }

        let action = self.screen.handle_key(key);
        self.perform(action);
        self.settle();
    }

    fn perform(&mut self, action: Action) {
        match action {
            Action::None => (),
            Action::Exit => self.quit(),
            Action::Login { username, password } => {
                if let Err(e) = self.client.login_user(&mut self.shell, &username, &password) {
                    debug!("login failed: {}", e);
                }
            }
            Action::Register {
                username,
                password,
                role,
            } => match self
                .client
                .register_user(&mut self.shell, &username, &password, &role)
            {
                Ok(()) => self.shell.navigate(LOGIN_PATH),
                Err(e) => debug!("registration failed: {}", e),
            },
            Action::CreateCourse(course) => match self.client.create_course(&mut self.shell, &course)
            {
                Ok(()) => self.shell.navigate(COURSES_PATH),
                Err(e) => debug!("creating course failed: {}", e),
            },
            Action::Refresh => {
                self.client.fetch_courses(&mut self.shell);
            }
            Action::Logout => {
                if let Err(e) = self.client.logout(&mut self.shell) {
                    self.shell.alert(&format!("Error: {}", e));
                }
            }
            Action::Go(route) => self.enter(route),
        }
    }

    /// Follow any navigation the client asked for
    fn settle(&mut self) {
        while let Some(route) = self.shell.take_navigation() {
            self.enter(route);
        }
    }

    fn enter(&mut self, route: Route) {
        debug!("entering {:?}", route);
        self.route = route;
        self.screen = screens::for_route(route);
        match route {
            Route::Courses => {
                self.client.fetch_courses(&mut self.shell);
            }
            Route::Login => self.shell.clear(COURSE_LIST_ID),
            Route::Register | Route::NewCourse => (),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_client::{MemoryStorage, Request, Response, TransportError, TOKEN_KEY};
    use std::{cell::RefCell, collections::VecDeque};

    #[derive(Default)]
    struct Canned {
        replies: RefCell<VecDeque<Response>>,
        sent: RefCell<Vec<Request>>,
    }

    impl Canned {
        fn with(replies: &[(u16, &str)]) -> Self {
            Self {
                replies: RefCell::new(
                    replies
                        .iter()
                        .map(|(status, body)| Response::new(*status, *body))
                        .collect(),
                ),
                sent: Default::default(),
            }
        }
    }

    impl Transport for Canned {
        fn send(&self, req: &Request) -> Result<Response, TransportError> {
            self.sent.borrow_mut().push(req.clone());
            self.replies
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| TransportError::Other("no reply queued".to_string()))
        }
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(app: &mut App<Canned, MemoryStorage>, s: &str) {
        for c in s.chars() {
            app.handle_event(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_starts_at_login_without_session() {
        let app = App::new(Client::new(
            "http://courses.test",
            Canned::default(),
            MemoryStorage::new(),
        ));

        assert_eq!(app.route(), Route::Login);
        assert!(app.client().transport().sent.borrow().is_empty());
        assert_eq!(app.shell().notice(), None);
    }

    #[test]
    fn test_starts_at_courses_with_session() {
        let app = App::new(Client::new(
            "http://courses.test",
            Canned::with(&[(200, "[]")]),
            MemoryStorage::with(TOKEN_KEY, "tok123"),
        ));

        assert_eq!(app.route(), Route::Courses);
        assert_eq!(
            app.shell().contents(COURSE_LIST_ID),
            Some("<p>No courses available.</p>")
        );
    }

    #[test]
    fn test_login_then_list() {
        let mut app = App::new(Client::new(
            "http://courses.test",
            Canned::with(&[(200, r#"{"access_token": "tok123"}"#), (200, "[]")]),
            MemoryStorage::new(),
        ));

        type_str(&mut app, "alice");
        app.handle_event(key(KeyCode::Tab));
        type_str(&mut app, "pw");
        app.handle_event(key(KeyCode::Enter));

        assert_eq!(app.route(), Route::Courses);
        assert_eq!(app.client().token().as_deref(), Some("tok123"));
        assert_eq!(app.shell().notice(), Some("Login successful"));
        assert_eq!(app.client().transport().sent.borrow().len(), 2);

        // the notice swallows keys until dismissed
        app.handle_event(key(KeyCode::Char('q')));
        assert!(app.running);
        app.handle_event(key(KeyCode::Enter));
        app.handle_event(key(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn test_expired_session_returns_to_login() {
        let app = App::new(Client::new(
            "http://courses.test",
            Canned::with(&[(401, r#"{"msg": "Token has expired"}"#)]),
            MemoryStorage::with(TOKEN_KEY, "stale"),
        ));

        assert_eq!(app.route(), Route::Login);
        assert_eq!(app.shell().notice(), Some("You must log in to continue."));
        assert_eq!(app.shell().contents(COURSE_LIST_ID), None);
    }

    #[test]
    fn test_logout() {
        let mut app = App::new(Client::new(
            "http://courses.test",
            Canned::with(&[(200, "[]")]),
            MemoryStorage::with(TOKEN_KEY, "tok123"),
        ));

        app.handle_event(key(KeyCode::Char('L')));

        assert_eq!(app.route(), Route::Login);
        assert_eq!(app.client().token(), None);
        assert_eq!(app.shell().contents(COURSE_LIST_ID), None);
    }
}
