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

//! Movement rules by piece type.
//!
//! Only pawn pushes, knight jumps and rook slides are validated. Bishops,
//! queens and kings may go anywhere.
//!
//! # Examples
//!
//! ```
//! use tapchess::{rules, Board, Square};
//!
//! let board = Board::new();
//!
//! // Knight b1 to c3.
//! assert!(rules::is_legal(&board, Square::new(7, 1), Square::new(5, 2)));
//!
//! // Rook a1 is boxed in by its own pawn.
//! assert!(!rules::is_legal(&board, Square::new(7, 0), Square::new(5, 0)));
//! ```

use arrayvec::ArrayVec;

use crate::{
    board::Board,
    color::Color,
    role::{ByRole, Role},
    square::Square,
};

/// How a piece type moves.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Rule {
    /// One step straight ahead, or two from the starting row. Occupancy is
    /// not considered.
    PawnPush,
    /// The knight jump, two squares in one direction and one in the other.
    Leap,
    /// Any distance along a row or column, as long as every square in
    /// between is empty.
    Slide,
    /// Every destination is accepted.
    Unchecked,
}

impl Rule {
    /// The rule for each piece type.
    pub const TABLE: ByRole<Rule> = ByRole {
        pawn: Rule::PawnPush,
        knight: Rule::Leap,
        bishop: Rule::Unchecked,
        rook: Rule::Slide,
        queen: Rule::Unchecked,
        king: Rule::Unchecked,
    };

    #[inline]
    pub const fn for_role(role: Role) -> Rule {
        *Rule::TABLE.get(role)
    }

    /// Tests if a piece of the given color may move from `from` to `to`
    /// under this rule.
    ///
    /// `Unchecked` accepts `from == to`. Use [`is_legal`] to rule out
    /// zero-length moves for every kind.
    pub fn accepts(self, board: &Board, color: Color, from: Square, to: Square) -> bool {
        match self {
            Rule::PawnPush => pawn_push(color, from, to),
            Rule::Leap => leap(from, to),
            Rule::Slide => slide(board, from, to),
            Rule::Unchecked => true,
        }
    }
}

/// Tests if the piece on `from` may move to `to`.
///
/// Returns `false` if `from` is empty or equal to `to`. The color of a
/// piece on `to` is not considered.
pub fn is_legal(board: &Board, from: Square, to: Square) -> bool {
    from != to
        && board
            .piece_at(from)
            .is_some_and(|piece| Rule::for_role(piece.role).accepts(board, piece.color, from, to))
}

/// Straight pawn advance: a single step in the direction of play, or a
/// double step from the starting row.
pub fn pawn_push(color: Color, from: Square, to: Square) -> bool {
    let (rows, cols) = from.delta(to);
    let direction = color.pawn_direction();
    cols == 0 && (rows == direction || (from.row() == color.pawn_row() && rows == 2 * direction))
}

pub fn leap(from: Square, to: Square) -> bool {
    matches!(from.delta(to), (-2 | 2, -1 | 1) | (-1 | 1, -2 | 2))
}

/// Orthogonal slide with an unobstructed path. The destination itself may
/// be occupied, but must differ from `from`.
pub fn slide(board: &Board, from: Square, to: Square) -> bool {
    from != to
        && (from.row() == to.row() || from.col() == to.col())
        && between(from, to).iter().all(|&sq| !board.is_occupied(sq))
}

/// Squares strictly between `a` and `b` on a shared row or column, ordered
/// from `a` towards `b`. Empty if the squares are adjacent, equal, or not
/// on a common row or column.
///
/// # Examples
///
/// ```
/// use tapchess::{rules::between, Square};
///
/// let path = between(Square::new(7, 0), Square::new(4, 0));
/// assert_eq!(path.as_slice(), [Square::new(6, 0), Square::new(5, 0)]);
///
/// assert!(between(Square::new(7, 0), Square::new(6, 1)).is_empty());
/// ```
pub fn between(a: Square, b: Square) -> ArrayVec<Square, 6> {
    let mut squares = ArrayVec::new();

    let (rows, cols) = a.delta(b);
    if rows != 0 && cols != 0 {
        return squares;
    }

    let step = (rows.signum(), cols.signum());
    let distance = rows.abs().max(cols.abs());
    for n in 1..distance {
        if let Some(sq) = a.offset(step.0 * n, step.1 * n) {
            squares.push(sq);
        }
    }

    squares
}
