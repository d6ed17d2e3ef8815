//! TUI application state and logic

use crate::game::{GameSession, Key};
use crate::wordlists::WordList;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    words: &'a WordList,
    pub session: GameSession<'a>,
    rng: StdRng,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    /// Create the app and start the first game
    ///
    /// A fixed `seed` makes the sequence of secrets reproducible.
    #[must_use]
    pub fn new(words: &'a WordList, seed: Option<u64>) -> Self {
        let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let secret = words.pick(&mut rng).clone();

        Self {
            words,
            session: GameSession::new(words, secret),
            rng,
            should_quit: false,
        }
    }

    /// Discard the current session and start a fresh one
    pub fn new_game(&mut self) {
        let secret = self.words.pick(&mut self.rng).clone();
        self.session = GameSession::new(self.words, secret);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.session.is_over() {
            // Letters are free again once the game has ended
            match key.code {
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            }
        } else {
            // Mid-game every letter belongs to the grid, so only non-letter
            // keys can drive the app itself
            match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.session.key_press(Key::Letter(c)),
                KeyCode::Backspace => self.session.key_press(Key::Delete),
                KeyCode::Enter => self.session.key_press(Key::Enter),
                _ => {}
            }
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
