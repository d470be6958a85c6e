//! Core game state and logic

use crate::bag::Bag;
use crate::board::Board;
use crate::piece::Piece;
use crate::score::Score;

/// Commands the game accepts from the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
}

/// The game engine: field, active and upcoming piece, supply bag, score and
/// the game-over flag.
///
/// Every command leaves the engine in a valid state; an impossible spawn is
/// not an error but the terminal game-over state, after which all commands
/// except [`Game::reset`] are no-ops.
pub struct Game {
    /// The playfield
    pub board: Board,
    /// Current falling piece
    pub current_piece: Piece,
    /// Upcoming piece, shown in the preview panel
    pub next_piece: Piece,
    /// Piece supply
    bag: Bag,
    /// Score tracking
    pub score: Score,
    /// Set when a freshly spawned piece cannot be placed
    pub game_over: bool,
}

impl Game {
    /// Create a new game with a randomly seeded bag.
    pub fn new() -> Self {
        Self::from_bag(Bag::new())
    }

    /// Create a new game with a fixed bag seed, for deterministic runs.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_bag(Bag::with_seed(seed))
    }

    fn from_bag(mut bag: Bag) -> Self {
        let current_piece = Piece::new(bag.draw());
        let next_piece = Piece::new(bag.draw());
        Self {
            board: Board::new(),
            current_piece,
            next_piece,
            bag,
            score: Score::new(),
            game_over: false,
        }
    }

    /// Process a player command. No-op once the game is over.
    pub fn process_action(&mut self, action: Action) {
        if self.game_over {
            return;
        }
        match action {
            Action::MoveLeft => self.move_left(),
            Action::MoveRight => self.move_right(),
            Action::Rotate => self.rotate(),
            Action::SoftDrop => {
                self.soft_drop();
                // A player-initiated drop is worth one point, even when the
                // step locks the piece or ends the game.
                self.score.add_drop_point();
            }
        }
    }

    /// Gravity step from the timer: the same descent as a player soft drop,
    /// without the drop point. No-op once the game is over.
    pub fn tick(&mut self) {
        if self.game_over {
            return;
        }
        self.soft_drop();
    }

    /// Whether every cell of the piece is inside the field and unoccupied.
    fn fits(&self, piece: &Piece) -> bool {
        piece.cells().iter().all(|cell| {
            self.board.is_inside(cell.row, cell.col) && self.board.is_empty(cell.row, cell.col)
        })
    }

    fn move_left(&mut self) {
        self.current_piece.translate(0, -1);
        if !self.fits(&self.current_piece) {
            self.current_piece.translate(0, 1);
        }
    }

    fn move_right(&mut self) {
        self.current_piece.translate(0, 1);
        if !self.fits(&self.current_piece) {
            self.current_piece.translate(0, -1);
        }
    }

    fn rotate(&mut self) {
        self.current_piece.rotate_cw();
        if !self.fits(&self.current_piece) {
            self.current_piece.rotate_ccw();
        }
    }

    /// Descend one row; an illegal step locks the piece instead.
    fn soft_drop(&mut self) {
        self.current_piece.translate(1, 0);
        if !self.fits(&self.current_piece) {
            self.current_piece.translate(-1, 0);
            self.lock_and_advance();
        }
    }

    /// Lock the current piece into the field, sweep and score full rows, and
    /// bring up the next piece.
    fn lock_and_advance(&mut self) {
        self.board
            .lock(&self.current_piece.cells(), self.current_piece.kind.marker());
        let cleared = self.board.sweep_full_rows();
        self.score.add_clear(cleared);
        if cleared > 0 {
            tracing::debug!(cleared, points = self.score.points, "rows cleared");
        }
        self.spawn();
    }

    /// Promote the next piece and draw a new one. A blocked spawn ends the
    /// game; the field is left untouched.
    fn spawn(&mut self) {
        self.current_piece =
            std::mem::replace(&mut self.next_piece, Piece::new(self.bag.draw()));
        if !self.fits(&self.current_piece) {
            self.game_over = true;
            tracing::info!(points = self.score.points, "game over");
        }
    }

    /// Start over: empty field, fresh bag cycle, two new pieces, zero score.
    /// Always available, including after game over.
    pub fn reset(&mut self) {
        self.board.reset();
        self.bag.reset();
        self.current_piece = Piece::new(self.bag.draw());
        self.next_piece = Piece::new(self.bag.draw());
        self.score.reset();
        self.game_over = false;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
