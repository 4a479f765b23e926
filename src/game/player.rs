use super::board::Cell;
use super::state::GameOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Convert player to the cell value its pieces occupy
    pub fn to_cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }

    /// Outcome recorded when this player connects four
    pub fn winning_outcome(self) -> GameOutcome {
        match self {
            Player::One => GameOutcome::PlayerOneWins,
            Player::Two => GameOutcome::PlayerTwoWins,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::One => "Red",
            Player::Two => "Yellow",
        }
    }
}
