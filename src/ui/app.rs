use crate::config::UiConfig;
use crate::game::{winning_line, GameStatus, GameState, COLS};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::Backend, layout::Rect, Terminal};
use std::io;
use std::time::Duration;

use super::game_view::{self, ViewState};

pub struct App {
    game_state: GameState,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    winning_cells: Vec<(usize, usize)>,
    /// Frame size at the last draw, for mapping mouse clicks to columns
    frame_area: Rect,
    config: UiConfig,
}

impl App {
    pub fn new(config: UiConfig) -> Self {
        App {
            game_state: GameState::initial(),
            selected_column: config.start_column.min(COLS - 1),
            should_quit: false,
            message: None,
            winning_cells: Vec::new(),
            frame_area: Rect::default(),
            config,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        tracing::info!("game started");
        loop {
            terminal.draw(|f| self.render(f)).map_err(Into::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        tracing::info!("quit requested");
        Ok(())
    }

    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(self.config.poll_interval_ms))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                Event::Mouse(mouse) if self.config.mouse => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_disc(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='9') => {
                // Digits past the last column are rejected by the game
                let column = c as usize - '1' as usize;
                if column < COLS {
                    self.selected_column = column;
                }
                self.drop_disc(column);
            }
            KeyCode::Char('r') => self.reset(),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(column) =
                    game_view::column_at(self.frame_area, mouse.column, mouse.row)
                {
                    self.message = None;
                    self.selected_column = column;
                    self.drop_disc(column);
                }
            }
            MouseEventKind::Moved => {
                if let Some(column) =
                    game_view::column_at(self.frame_area, mouse.column, mouse.row)
                {
                    self.selected_column = column;
                }
            }
            _ => {}
        }
    }

    /// Forward a column choice to the game and describe the result
    fn drop_disc(&mut self, column: usize) {
        match self.game_state.apply_drop(column) {
            Ok(placement) => match self.game_state.status() {
                GameStatus::Won(player) => {
                    if self.config.highlight_winning_line {
                        self.winning_cells =
                            winning_line(self.game_state.board(), placement.row, placement.col)
                                .unwrap_or_default();
                    }
                    self.message = Some(format!("{player} wins! Press 'r' to play again."));
                }
                GameStatus::Draw => {
                    self.message = Some("It's a draw! Press 'r' to play again.".to_string());
                }
                GameStatus::InProgress => {}
            },
            Err(err) if err.is_silent() => {}
            Err(err) => {
                self.message = Some(capitalize(&err.to_string()));
            }
        }
    }

    fn reset(&mut self) {
        self.game_state = self.game_state.reset();
        self.selected_column = self.config.start_column.min(COLS - 1);
        self.winning_cells.clear();
        self.message = Some("New game started!".to_string());
    }

    fn render(&mut self, frame: &mut ratatui::Frame) {
        self.frame_area = frame.area();
        let view = ViewState {
            selected_column: self.selected_column,
            message: self.message.as_deref(),
            winning_cells: &self.winning_cells,
        };
        game_view::render(frame, &self.game_state, &view);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(UiConfig::default())
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
