use crate::game::{Game, GameOutcome, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget;

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

/// Announcement for a finished game; `None` while it is still running
pub fn outcome_message(outcome: GameOutcome) -> Option<String> {
    match outcome {
        GameOutcome::InProgress => None,
        GameOutcome::Draw => Some("It's a draw!".to_string()),
        GameOutcome::PlayerOneWins | GameOutcome::PlayerTwoWins => outcome
            .winner()
            .map(|player| format!("{} wins!", player.name())),
    }
}

/// Draw the whole game screen. Returns the rect the board landed in so
/// pointer events can be mapped back onto columns.
pub fn render(
    frame: &mut Frame,
    game: &Game,
    selected_column: usize,
    message: &Option<String>,
) -> Rect {
    let (_, board_height) =
        board_widget::board_size(game.board().columns(), game.board().rows());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Min(board_height),    // Board
            Constraint::Length(3),            // Message
            Constraint::Length(3),            // Controls
        ])
        .split(frame.area());

    render_header(frame, game, chunks[0]);
    let board_area = board_widget::render_board(frame, game, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);

    board_area
}

fn render_header(frame: &mut Frame, game: &Game, area: Rect) {
    let (status, color) = match game.outcome() {
        GameOutcome::InProgress => {
            let player = game.current_player();
            (
                format!("Current Player: {}", player.name()),
                player_color(player),
            )
        }
        outcome => {
            let color = outcome.winner().map(player_color).unwrap_or(Color::White);
            let text = outcome_message(outcome).unwrap_or_default();
            (format!("Game Over  |  {text}"), color)
        }
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→: Move  |  Enter/Click: Drop  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
