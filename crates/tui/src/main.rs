use anyhow::{Context, Result};
use app::App;
use config::{Config, XDG_PREFIX};
use course_client::{Client, HttpTransport, Storage, Transport};
use event::EventBus;
use log::{info, warn};
use ratatui::prelude::*;
use simplelog::WriteLogger;
use std::{fs::File, io};
use token_store::TokenFile;
use xdg::BaseDirectories;

mod app;
mod config;
mod event;
mod screens;
mod shell;
mod styles;
mod token_store;
mod tui;
mod widgets;

fn main() -> Result<()> {
    let config = Config::load()?;
    init_logging(&config)?;
    if let Err(e) = config.save() {
        warn!("couldn't write config back: {:?}", e);
    }
    info!("using course api at {}", config.base_url);

    let client = Client::new(
        config.base_url.clone(),
        HttpTransport::new(),
        TokenFile::open()?,
    );
    let mut app = App::new(client);

    let mut events = EventBus::new();
    events.spawn_terminal_listener()?;

    let backend = CrosstermBackend::new(io::stderr());
    let mut terminal = Terminal::new(backend)?;
    tui::init(&mut terminal)?;

    let res = run(&mut terminal, &events, &mut app);

    tui::exit(&mut terminal)?;

    res
}

fn run<B: Backend, T: Transport, S: Storage>(
    terminal: &mut Terminal<B>,
    events: &EventBus,
    app: &mut App<T, S>,
) -> Result<()> {
    while app.running {
        tui::draw(terminal, app)?;
        let event = events.next()?;
        app.handle_event(event);
    }

    Ok(())
}

fn init_logging(config: &Config) -> Result<()> {
    let path = BaseDirectories::with_prefix(XDG_PREFIX)?.place_cache_file("course-tui.log")?;
    WriteLogger::init(
        config.level_filter(),
        simplelog::Config::default(),
        File::create(&path).context("error creating log file")?,
    )?;

    Ok(())
}
