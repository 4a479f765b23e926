use crate::config::AppConfig;
use crate::error::BoardError;
use crate::game::Game;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::Backend, layout::Rect, Terminal};
use std::io;
use std::time::Duration;
use tracing::{debug, warn};

use super::{board_widget, game_view};

pub struct App {
    game: Game,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    /// Where the board was last drawn, for mapping pointer events
    board_area: Rect,
    tick_rate: Duration,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, BoardError> {
        let game = Game::new(config.board.columns, config.board.rows)?;
        Ok(App {
            selected_column: game.board().columns() / 2, // Start in middle
            game,
            should_quit: false,
            message: None,
            board_area: Rect::default(),
            tick_rate: Duration::from_millis(config.ui.tick_rate_ms),
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
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
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Wait up to one tick for input and dispatch it
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
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
                if self.selected_column + 1 < self.game.board().columns() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.game.restart();
                self.selected_column = self.game.board().columns() / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Hover selects the column under the pointer, a left click drops into it
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let column = board_widget::column_at(
            self.board_area,
            mouse.column,
            mouse.row,
            self.game.board().columns(),
        );

        match mouse.kind {
            MouseEventKind::Moved => {
                if let Some(column) = column {
                    self.selected_column = column;
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(column) = column {
                    self.message = None;
                    self.selected_column = column;
                    self.drop_piece();
                }
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        if self.game.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.game.play(self.selected_column) {
            Ok(result) if !result.applied => {
                self.message = Some("Column is full!".to_string());
            }
            Ok(result) => {
                debug!(column = self.selected_column, outcome = ?result.outcome, "drop applied");
                // Check if game just ended
                if let Some(text) = game_view::outcome_message(result.outcome) {
                    self.message = Some(text);
                }
            }
            Err(err) => {
                warn!(error = %err, "drop outside the board");
                self.message = Some("Invalid column!".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut ratatui::Frame) {
        self.board_area =
            game_view::render(frame, &self.game, self.selected_column, &self.message);
    }
}
