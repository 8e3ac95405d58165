//! TUI application state and logic

use crate::core::Code;
use crate::game::{
    ConfigError, GameConfig, GameStatus, GuessError, JsonSnapshot, RoundEngine,
};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub config: GameConfig,
    pub engine: RoundEngine,
    pub snapshot: Option<JsonSnapshot>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    games_started: u64,
    reported_failures: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index = winning round
    pub round_distribution: Vec<usize>,
}

impl App {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `config` cannot produce a game.
    pub fn new(config: GameConfig, snapshot: Option<JsonSnapshot>) -> Result<Self, ConfigError> {
        let engine = Self::fresh_engine(&config, 0, snapshot.as_ref())?;

        Ok(Self {
            stats: Statistics {
                round_distribution: vec![0; config.max_rounds + 1],
                ..Statistics::default()
            },
            config,
            engine,
            snapshot,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Crack the hidden code.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "● right symbol, right place  ○ right symbol, wrong place".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
            input_mode: InputMode::Guessing,
            games_started: 1,
            reported_failures: 0,
        })
    }

    fn fresh_engine(
        config: &GameConfig,
        game: u64,
        snapshot: Option<&JsonSnapshot>,
    ) -> Result<RoundEngine, ConfigError> {
        // A fixed seed would replay the same game forever, so offset it per game
        let config = GameConfig {
            seed: config.seed.map(|s| s.wrapping_add(game)),
            ..config.clone()
        };
        let mut engine = RoundEngine::new(config.build()?);
        if let Some(snapshot) = snapshot {
            engine.add_observer(Box::new(snapshot.clone()));
        }
        engine.start();
        Ok(engine)
    }

    pub fn handle_guess(&mut self, input: &str) {
        let guess = Code::parse(input);

        match self.engine.submit(guess) {
            Ok(feedback) => {
                self.input_buffer.clear();
                match self.engine.status() {
                    GameStatus::Won(round) => {
                        self.record_result(Some(round));

                        let celebration = match round {
                            1 => "🎯 FIRST TRY! Extraordinary! 🌟",
                            2 => "🔥 MAGNIFICENT! Two rounds! 🔥",
                            3 => "✨ SPLENDID! Three rounds! ✨",
                            4 | 5 => "👏 GREAT JOB! 👏",
                            _ => "🎉 CRACKED IT! 🎉",
                        };
                        self.add_message(celebration, MessageStyle::Success);
                        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                    }
                    GameStatus::Lost => {
                        self.record_result(None);
                        let solution = self
                            .engine
                            .solution()
                            .map(ToString::to_string)
                            .unwrap_or_default();
                        self.add_message(
                            &format!("Out of rounds! The code was {solution}"),
                            MessageStyle::Error,
                        );
                        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                    }
                    _ => {
                        self.add_message(
                            &format!(
                                "{} exact, {} misplaced",
                                feedback.exact(),
                                feedback.present()
                            ),
                            MessageStyle::Info,
                        );
                    }
                }
                let failures = self.engine.persist_failures().len();
                if failures > self.reported_failures {
                    self.reported_failures = failures;
                    let text = format!(
                        "Snapshot not written: {}",
                        self.engine.persist_failures()[failures - 1]
                    );
                    self.add_message(&text, MessageStyle::Error);
                }
            }
            Err(GuessError::NotAccepting(_)) => {
                self.input_mode = InputMode::GameOver;
            }
            Err(error) => {
                self.add_message(&format!("Input not okay: {error}"), MessageStyle::Error);
            }
        }
    }

    fn record_result(&mut self, won_in: Option<usize>) {
        self.stats.total_games += 1;
        if let Some(round) = won_in {
            self.stats.games_won += 1;
            if let Some(slot) = self.stats.round_distribution.get_mut(round) {
                *slot += 1;
            }
        }
        self.input_mode = InputMode::GameOver;
    }

    pub fn new_game(&mut self) {
        match Self::fresh_engine(&self.config, self.games_started, self.snapshot.as_ref()) {
            Ok(engine) => {
                self.engine = engine;
                self.games_started += 1;
                self.reported_failures = 0;
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.add_message("New game started! A fresh code is hidden.", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Accept a typed character into the guess buffer
    pub fn push_char(&mut self, c: char) {
        if c.is_ascii_alphabetic() && self.input_buffer.len() < self.engine.positions() {
            self.input_buffer.push(c.to_ascii_uppercase());
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
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    _ => {}
                },
                InputMode::Guessing => match key.code {
                    // Letters are symbols, so quitting mid-game is on Esc
                    KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.push_char(c);
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        let input = app.input_buffer.clone();
                        app.handle_guess(&input);
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
