use super::{Board, Player};
use crate::error::BoardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    InProgress,
    Draw,
    PlayerOneWins,
    PlayerTwoWins,
}

impl GameOutcome {
    /// Whether the game has ended; terminal outcomes never change
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::PlayerOneWins => Some(Player::One),
            GameOutcome::PlayerTwoWins => Some(Player::Two),
            GameOutcome::InProgress | GameOutcome::Draw => None,
        }
    }
}

/// What happened to a requested move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// `false` when the column was full or the game had already ended
    pub applied: bool,
    pub outcome: GameOutcome,
}

impl MoveResult {
    pub(crate) fn applied(outcome: GameOutcome) -> Self {
        MoveResult {
            applied: true,
            outcome,
        }
    }

    pub(crate) fn rejected(outcome: GameOutcome) -> Self {
        MoveResult {
            applied: false,
            outcome,
        }
    }
}

/// A board plus whose turn it is. Red (player one) starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current_player: Player,
}

impl Game {
    /// Create a game on an empty board of the given size
    pub fn new(columns: usize, rows: usize) -> Result<Self, BoardError> {
        Ok(Game {
            board: Board::new(columns, rows)?,
            current_player: Player::One,
        })
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> GameOutcome {
        self.board.outcome()
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.board.outcome().is_terminal()
    }

    /// Drop the current player's piece into `column`. The turn passes only
    /// when the piece was placed and the game goes on.
    pub fn play(&mut self, column: usize) -> Result<MoveResult, BoardError> {
        let result = self.board.apply_move(self.current_player, column)?;
        if result.applied && !result.outcome.is_terminal() {
            self.current_player = self.current_player.other();
        }
        Ok(result)
    }

    /// Clear the board and hand the first move back to player one
    pub fn restart(&mut self) {
        self.board.reset();
        self.current_player = Player::One;
    }
}

impl Default for Game {
    fn default() -> Self {
        Game {
            board: Board::default(),
            current_player: Player::One,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    fn play_all(game: &mut Game, columns: &[usize]) -> MoveResult {
        let mut last = None;
        for &column in columns {
            last = Some(game.play(column).unwrap());
        }
        last.unwrap()
    }

    #[test]
    fn test_initial_state() {
        let game = Game::default();
        assert_eq!(game.current_player(), Player::One);
        assert!(!game.is_terminal());
        assert_eq!(game.board().playable_columns().len(), 7);
    }

    #[test]
    fn test_apply_move() {
        let mut game = Game::default();
        let result = game.play(3).unwrap();

        assert!(result.applied);
        assert_eq!(game.current_player(), Player::Two);
        assert_eq!(game.board().get(3, 5).unwrap(), Cell::PlayerOne);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut game = Game::new(7, 2).unwrap();
        play_all(&mut game, &[0, 0]);
        assert_eq!(game.current_player(), Player::One);

        let result = game.play(0).unwrap();
        assert!(!result.applied);
        assert_eq!(game.current_player(), Player::One);
    }

    #[test]
    fn test_out_of_bounds_keeps_turn() {
        let mut game = Game::default();
        assert!(game.play(9).is_err());
        assert_eq!(game.current_player(), Player::One);
    }

    #[test]
    fn test_win_detection() {
        let mut game = Game::default();

        // Red builds the bottom row while Yellow stacks on top
        let result = play_all(&mut game, &[0, 0, 1, 1, 2, 2, 3]);

        assert!(game.is_terminal());
        assert_eq!(result.outcome, GameOutcome::PlayerOneWins);
        assert_eq!(game.outcome().winner(), Some(Player::One));
        // The winner keeps the turn marker
        assert_eq!(game.current_player(), Player::One);
    }

    #[test]
    fn test_draw() {
        let mut game = Game::default();
        let pattern = [
            3, 4, 4, 6, 0, 3, 5, 2, 6, 5, 0, 6, 5, 0, 3, 6, 5, 6, 1, 3, 1, 3, 6, 5, 2, 0, 5, 3,
            4, 4, 0, 1, 1, 1, 0, 1, 4, 2, 4, 2, 2, 2,
        ];

        for (i, &column) in pattern.iter().enumerate() {
            let result = game.play(column).unwrap();
            assert!(result.applied);
            if i + 1 < pattern.len() {
                assert_eq!(result.outcome, GameOutcome::InProgress);
            }
        }

        assert_eq!(game.outcome(), GameOutcome::Draw);
        assert_eq!(game.outcome().winner(), None);
    }

    #[test]
    fn test_last_piece_wins_instead_of_drawing() {
        let mut game = Game::default();
        let pattern = [
            3, 1, 1, 1, 4, 3, 6, 3, 2, 5, 2, 6, 4, 0, 6, 6, 2, 0, 6, 4, 5, 6, 1, 2, 4, 4, 4, 1,
            5, 2, 3, 1, 3, 2, 0, 5, 5, 3, 0, 0, 5, 0,
        ];

        let result = play_all(&mut game, &pattern);
        assert!(result.applied);
        assert!(game.board().playable_columns().is_empty());
        assert_eq!(result.outcome, GameOutcome::PlayerTwoWins);
    }

    #[test]
    fn test_restart() {
        let mut game = Game::default();
        play_all(&mut game, &[0, 0, 1, 1, 2, 2, 3]);
        assert!(game.is_terminal());

        game.restart();
        assert_eq!(game, Game::default());
    }
}
