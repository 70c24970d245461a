use course_client::COURSE_LIST_ID;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{Action, Screen};
use crate::{
    shell::{Route, Shell},
    styles::hint_text,
};

/// Shows whatever the client last rendered into the course list
#[derive(Default)]
pub struct CoursesScreen {
    scroll: u16,
    cached_render: Option<(String, Paragraph<'static>)>,
}

impl CoursesScreen {
    fn rendered(&mut self, html: &str) -> Paragraph<'static> {
        match &self.cached_render {
            Some((cached_html, p)) if cached_html == html => p.clone(),
            _ => {
                let p = course_markup::render(html);
                self.cached_render = Some((html.to_string(), p.clone()));
                self.scroll = 0;
                p
            }
        }
    }
}

impl Screen for CoursesScreen {
    fn draw(&mut self, shell: &Shell, frame: &mut Frame, area: Rect) {
        let layout = Layout::new(
            Direction::Vertical,
            [Constraint::Min(1), Constraint::Length(1)],
        )
        .split(area);

        let block = Block::default()
            .title("Courses")
            .borders(Borders::ALL)
            .title_alignment(Alignment::Center);
        let body = match shell.contents(COURSE_LIST_ID) {
            Some(html) => self.rendered(html).scroll((self.scroll, 0)),
            None => Paragraph::new("Loading..."),
        };
        frame.render_widget(body.block(block), layout[0]);

        frame.render_widget(
            Paragraph::new(hint_text(
                "j/k: scroll | r: refresh | n: new course | L: log out | q: quit",
            )),
            layout[1],
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = self.scroll.saturating_add(1);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            KeyCode::Char('r') => return Action::Refresh,
            KeyCode::Char('n') => return Action::Go(Route::NewCourse),
            KeyCode::Char('L') => return Action::Logout,
            KeyCode::Char('q') | KeyCode::Esc => return Action::Exit,
            _ => (),
        };

        Action::None
    }
}
