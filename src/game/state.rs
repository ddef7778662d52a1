use tracing::{debug, info};

use super::win::check_winner;
use super::{Board, Player, COLS};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Flattened view of where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

/// Where the last disc landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub player: Player,
}

/// Board plus turn and outcome. Transitions return a new value, so a
/// snapshot held elsewhere never sees later moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
    last_move: Option<Placement>,
}

impl GameState {
    /// Empty board, Red to move
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::FIRST,
            outcome: None,
            last_move: None,
        }
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            Some(GameOutcome::Winner(player)) => Some(player),
            _ => None,
        }
    }

    pub fn status(&self) -> GameStatus {
        match self.outcome {
            None => GameStatus::InProgress,
            Some(GameOutcome::Winner(player)) => GameStatus::Won(player),
            Some(GameOutcome::Draw) => GameStatus::Draw,
        }
    }

    /// Won or drawn; no further moves are accepted until reset
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn last_move(&self) -> Option<Placement> {
        self.last_move
    }

    pub fn move_count(&self) -> usize {
        self.board.disc_count()
    }

    /// Columns that can still take a disc. Empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop the current player's disc into `column` and return the
    /// resulting state.
    pub fn drop_disc(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_drop(column)?;
        Ok(next)
    }

    /// In-place drop. On error `self` is untouched.
    pub fn apply_drop(&mut self, column: usize) -> Result<Placement, MoveError> {
        if self.is_terminal() {
            debug!(column, "move ignored, game is over");
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        let row = self
            .board
            .drop_piece(column, player.disc())
            .inspect_err(|err| debug!(column, %player, %err, "move rejected"))?;
        let placement = Placement {
            row,
            col: column,
            player,
        };
        self.last_move = Some(placement);
        debug!(row, column, %player, "disc placed");

        if let Some(winner) = check_winner(&self.board, row, column) {
            self.outcome = Some(GameOutcome::Winner(winner));
            info!(%winner, moves = self.move_count(), "game won");
            return Ok(placement);
        }

        if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
            info!(moves = self.move_count(), "game drawn");
        }
        self.current_player = player.other();

        Ok(placement)
    }

    /// A fresh game, regardless of the current one
    pub fn reset(&self) -> GameState {
        debug!("game reset");
        GameState::initial()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
