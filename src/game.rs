// This file is part of the tapchess library.
// Copyright (C) 2026 The tapchess developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

use std::num::NonZeroU32;

use tracing::{debug, trace};

use crate::{
    board::Board,
    color::{ByColor, Color},
    rules,
    square::{Square, SquareList},
    types::{CaptureMode, Piece},
};

/// What a press on a square did.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Press {
    /// A piece of the side to move was picked up.
    Selected(Square),
    /// The selected square was pressed again and the piece put back.
    Deselected(Square),
    /// The selected piece moved.
    Moved {
        piece: Piece,
        from: Square,
        to: Square,
        /// Previous occupant of `to`.
        capture: Option<Piece>,
    },
    /// The selected piece may not move to `to`. The selection is cleared.
    Rejected { from: Square, to: Square },
    /// Nothing was selected and the square holds no piece of the side to
    /// move.
    Ignored(Square),
}

impl Press {
    /// Checks if the press completed a move.
    pub const fn is_move(self) -> bool {
        matches!(self, Press::Moved { .. })
    }

    /// Gets the captured piece, if a move captured one.
    pub const fn capture(self) -> Option<Piece> {
        match self {
            Press::Moved { capture, .. } => capture,
            _ => None,
        }
    }
}

/// A starting point for a [`Game`] other than the initial position.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Setup {
    /// Piece positions on the board.
    pub board: Board,
    /// Side to move.
    pub turn: Color,
}

impl Default for Setup {
    fn default() -> Setup {
        Setup {
            board: Board::new(),
            turn: Color::White,
        }
    }
}

/// Owned copy of the complete state of a [`Game`], for rendering.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Snapshot {
    pub board: Board,
    pub selection: Option<Square>,
    pub turn: Color,
    pub move_number: NonZeroU32,
    /// Captured pieces by the color of the captured piece, in capture order.
    pub captured: ByColor<Vec<Piece>>,
}

impl Default for Snapshot {
    fn default() -> Snapshot {
        Game::new().snapshot()
    }
}

/// Board, selection, side to move, move counter and captured pieces of a
/// game played by pressing squares.
///
/// Pressing a piece of the side to move selects it. Pressing another square
/// attempts to move the selected piece there, pressing the same square
/// again deselects it.
///
/// # Examples
///
/// ```
/// use tapchess::{Color, Game, Press, Square};
///
/// let mut game = Game::new();
///
/// assert_eq!(game.press(Square::new(6, 4)), Press::Selected(Square::new(6, 4)));
/// assert!(game.press(Square::new(4, 4)).is_move());
///
/// assert_eq!(game.turn(), Color::Black);
/// assert_eq!(game.move_number().get(), 2);
/// assert_eq!(game.board().piece_at(Square::new(4, 4)), Some(Color::White.pawn()));
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    selection: Option<Square>,
    turn: Color,
    move_number: NonZeroU32,
    captured: ByColor<Vec<Piece>>,
    mode: CaptureMode,
}

impl Game {
    /// A game in the initial position with [`CaptureMode::Permissive`].
    pub fn new() -> Game {
        Game::with_capture_mode(CaptureMode::default())
    }

    pub fn with_capture_mode(mode: CaptureMode) -> Game {
        Game::from_setup(Setup::default(), mode)
    }

    /// A game starting from an arbitrary setup. [`Game::reset()`] still
    /// returns to the initial position.
    pub fn from_setup(setup: Setup, mode: CaptureMode) -> Game {
        Game {
            board: setup.board,
            selection: None,
            turn: setup.turn,
            move_number: NonZeroU32::MIN,
            captured: ByColor::default(),
            mode,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The square of the piece picked up by the side to move.
    pub fn selection(&self) -> Option<Square> {
        self.selection
    }

    /// Side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Starts at 1 and is increased after every completed move of either
    /// side.
    pub fn move_number(&self) -> NonZeroU32 {
        self.move_number
    }

    /// Captured pieces by the color of the captured piece, in capture order.
    pub fn captured(&self) -> ByColor<&[Piece]> {
        self.captured.as_ref().map(Vec::as_slice)
    }

    pub fn capture_mode(&self) -> CaptureMode {
        self.mode
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            selection: self.selection,
            turn: self.turn,
            move_number: self.move_number,
            captured: self.captured.clone(),
        }
    }

    /// Tests if the piece on `from` may move to `to`, considering the
    /// capture mode but not whose turn it is.
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        self.board.piece_at(from).is_some_and(|piece| {
            rules::is_legal(&self.board, from, to)
                && self.mode.allows(piece.color, self.board.piece_at(to))
        })
    }

    /// Squares the selected piece may move to. Empty if nothing is
    /// selected.
    pub fn targets(&self) -> SquareList {
        match self.selection {
            Some(from) => Square::all()
                .filter(|&to| self.is_legal(from, to))
                .collect(),
            None => SquareList::new(),
        }
    }

    /// Handles a press on `sq`.
    pub fn press(&mut self, sq: Square) -> Press {
        let press = match self.selection {
            None => match self.board.piece_at(sq) {
                Some(piece) if piece.color == self.turn => {
                    self.selection = Some(sq);
                    Press::Selected(sq)
                }
                _ => Press::Ignored(sq),
            },
            Some(from) if from == sq => {
                self.selection = None;
                Press::Deselected(sq)
            }
            Some(from) => {
                self.selection = None;
                self.play(from, sq)
            }
        };

        match press {
            Press::Selected(sq) => trace!(%sq, turn = %self.turn, "selected"),
            Press::Deselected(sq) => trace!(%sq, turn = %self.turn, "deselected"),
            Press::Ignored(sq) => trace!(%sq, turn = %self.turn, "ignored press"),
            Press::Moved {
                piece,
                from,
                to,
                capture,
            } => debug!(
                %piece,
                %from,
                %to,
                ?capture,
                move_number = self.move_number.get(),
                "moved"
            ),
            Press::Rejected { from, to } => debug!(%from, %to, "rejected move"),
        }

        press
    }

    /// Handles a press on the square at `row` and `col` and returns the
    /// resulting state.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range `0..8`.
    #[track_caller]
    pub fn press_square(&mut self, row: u8, col: u8) -> Snapshot {
        self.press(Square::new(row, col));
        self.snapshot()
    }

    /// Restores the initial position, clears selection and captures, and
    /// returns the resulting state. The capture mode is kept.
    pub fn reset(&mut self) -> Snapshot {
        *self = Game::with_capture_mode(self.mode);
        debug!("reset");
        self.snapshot()
    }

    fn play(&mut self, from: Square, to: Square) -> Press {
        if !self.is_legal(from, to) {
            return Press::Rejected { from, to };
        }

        let Some(piece) = self.board.remove_piece_at(from) else {
            return Press::Rejected { from, to };
        };

        let capture = self.board.set_piece_at(to, piece);
        if let Some(captured) = capture {
            self.captured.get_mut(captured.color).push(captured);
        }

        self.turn = !self.turn;
        self.move_number = self.move_number.saturating_add(1);

        Press::Moved {
            piece,
            from,
            to,
            capture,
        }
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

impl From<&Game> for Snapshot {
    fn from(game: &Game) -> Snapshot {
        game.snapshot()
    }
}
