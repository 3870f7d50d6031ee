use crate::config::Config;
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::{self, LogBuffer};
use crate::model::{DatasetLoader, JsonDataset, MockDataset};
use crate::state::State;
use crate::store::Registry;
use crate::ui::Theme;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, stdout};
use std::path::PathBuf;

/// Oversees dataset loading, state management, and terminal output.
///
pub struct App {
    state: State,
}

impl App {
    /// Start a new application according to the given configuration, reading
    /// records from `data_file` when given, else from the configured file, else
    /// from the built-in sample. Returns the result of the application execution.
    ///
    pub fn start(config: Config, data_file: Option<PathBuf>) -> Result<()> {
        let log_buffer = LogBuffer::default();
        logger::init(log_buffer.clone(), config.level_filter()?)?;

        info!("Starting application...");
        let loader = App::loader(data_file.or_else(|| config.data_file.clone()));
        let registry = Registry::new(loader.load()?);
        let theme = Theme::from_name(&config.theme_name).unwrap_or_else(|| {
            warn!(
                "Unknown theme '{}', using '{}'",
                config.theme_name,
                Theme::default().name
            );
            Theme::default()
        });

        let mut app = App {
            state: State::new(
                registry,
                theme,
                config.page_size,
                config.toast_duration(),
                log_buffer,
            ),
        };
        app.start_ui()?;

        info!("Exiting application...");
        Ok(())
    }

    fn loader(data_file: Option<PathBuf>) -> Box<dyn DatasetLoader> {
        match data_file {
            Some(path) => {
                info!("Loading records from {}", path.display());
                Box::new(JsonDataset::new(path))
            }
            None => Box::new(MockDataset),
        }
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. The terminal is restored even when the
    /// loop fails.
    ///
    fn start_ui(&mut self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let result = self.run(&mut terminal);

        disable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            terminal.draw(|frame| crate::ui::render(frame, &mut self.state))?;
            if !terminal_event_handler.handle_next(&mut self.state)? {
                debug!("Received application exit request.");
                break;
            }
        }
        Ok(())
    }
}
