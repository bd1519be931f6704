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

//! Piece placement.

use std::{
    error::Error,
    fmt::{self, Write as _},
    str::FromStr,
};

use crate::{
    color::{ByColor, Color},
    role::Role,
    square::Square,
    types::Piece,
};

/// One row of the board, column 0 first.
pub type Row = [Option<Piece>; 8];

const BACK_ROW: [Role; 8] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

const fn back_row(color: Color) -> Row {
    let mut row = [None; 8];
    let mut col = 0;
    while col < 8 {
        row[col] = Some(BACK_ROW[col].of(color));
        col += 1;
    }
    row
}

const fn pawn_row(color: Color) -> Row {
    [Some(color.pawn()); 8]
}

/// Error when parsing an invalid board placement.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseBoardError {
    /// Not exactly 8 rows separated by `/`.
    RowCount,
    /// A row does not describe exactly 8 squares.
    RowWidth {
        #[allow(missing_docs)]
        row: usize,
    },
    /// Unexpected character.
    InvalidChar {
        #[allow(missing_docs)]
        ch: char,
    },
}

impl fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseBoardError::RowCount => f.write_str("expected 8 rows"),
            ParseBoardError::RowWidth { row } => {
                write!(f, "row {row} does not have exactly 8 squares")
            }
            ParseBoardError::InvalidChar { ch } => {
                write!(f, "invalid character in board placement: {ch:?}")
            }
        }
    }
}

impl Error for ParseBoardError {}

/// Piece positions on the 8x8 grid.
///
/// # Examples
///
/// ```
/// use tapchess::{Board, Color, Square};
///
/// let board = Board::new();
/// assert_eq!(board.piece_at(Square::new(7, 4)), Some(Color::White.king()));
/// assert_eq!(board.piece_at(Square::new(4, 4)), None);
///
/// assert_eq!(board.diagram(), "\
/// r n b q k b n r
/// p p p p p p p p
/// . . . . . . . .
/// . . . . . . . .
/// . . . . . . . .
/// . . . . . . . .
/// P P P P P P P P
/// R N B Q K B N R
/// ");
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Board {
    rows: [Row; 8],
}

impl Board {
    /// The standard starting position. Every call produces an independent
    /// board.
    pub const fn new() -> Board {
        Board {
            rows: [
                back_row(Color::Black),
                pawn_row(Color::Black),
                [None; 8],
                [None; 8],
                [None; 8],
                [None; 8],
                pawn_row(Color::White),
                back_row(Color::White),
            ],
        }
    }

    pub const fn empty() -> Board {
        Board {
            rows: [[None; 8]; 8],
        }
    }

    /// Parses the piece placement field of a FEN. The first row in the
    /// text is row 0.
    ///
    /// # Errors
    ///
    /// Returns [`ParseBoardError`] if the text does not describe exactly
    /// 8 rows of 8 squares each.
    ///
    /// # Examples
    ///
    /// ```
    /// use tapchess::Board;
    ///
    /// let board = Board::from_board_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR")?;
    /// assert_eq!(board, Board::new());
    /// # Ok::<_, tapchess::ParseBoardError>(())
    /// ```
    pub fn from_board_fen(board_fen: &str) -> Result<Board, ParseBoardError> {
        let mut board = Board::empty();
        let mut rows = board_fen.split('/');

        for (row_index, row) in board.rows.iter_mut().enumerate() {
            let text = rows.next().ok_or(ParseBoardError::RowCount)?;
            let mut col = 0;

            for ch in text.chars() {
                if let Some(empty) = ch.to_digit(10).filter(|n| (1..=8).contains(n)) {
                    col += empty as usize;
                } else if let Some(piece) = Piece::from_char(ch) {
                    if col < 8 {
                        row[col] = Some(piece);
                    }
                    col += 1;
                } else {
                    return Err(ParseBoardError::InvalidChar { ch });
                }

                if col > 8 {
                    return Err(ParseBoardError::RowWidth { row: row_index });
                }
            }

            if col != 8 {
                return Err(ParseBoardError::RowWidth { row: row_index });
            }
        }

        if rows.next().is_some() {
            return Err(ParseBoardError::RowCount);
        }

        Ok(board)
    }

    /// Renders the piece placement field of a FEN, row 0 first.
    pub fn board_fen(&self) -> String {
        let mut fen = String::with_capacity(71);

        for (row_index, row) in self.rows.iter().enumerate() {
            if row_index > 0 {
                fen.push('/');
            }

            let mut empty = 0;
            for square in row {
                match square {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        fen.push(piece.char());
                    }
                    None => empty += 1,
                }
            }

            if empty > 0 {
                fen.push(char::from(b'0' + empty));
            }
        }

        fen
    }

    /// Renders the board as 8 lines of space separated piece letters, with
    /// `.` for empty squares, row 0 first.
    pub fn diagram(&self) -> String {
        let mut diagram = String::with_capacity(128);
        for row in &self.rows {
            for (col, square) in row.iter().enumerate() {
                diagram.push(square.map_or('.', Piece::char));
                diagram.push(if col < 7 { ' ' } else { '\n' });
            }
        }
        diagram
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.rows[usize::from(sq.row())][usize::from(sq.col())]
    }

    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|piece| piece.color)
    }

    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.piece_at(sq).is_some()
    }

    /// Puts a piece on a square, returning the previous occupant.
    pub fn set_piece_at(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.square_mut(sq).replace(piece)
    }

    pub fn remove_piece_at(&mut self, sq: Square) -> Option<Piece> {
        self.square_mut(sq).take()
    }

    fn square_mut(&mut self, sq: Square) -> &mut Option<Piece> {
        &mut self.rows[usize::from(sq.row())][usize::from(sq.col())]
    }

    /// Rows in order, row 0 first.
    pub fn rows(&self) -> &[Row; 8] {
        &self.rows
    }

    /// Iterates over all pieces in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Number of pieces of each color.
    pub fn material(&self) -> ByColor<usize> {
        let mut counts = ByColor::<usize>::default();
        for (_, piece) in self.pieces() {
            *counts.get_mut(piece.color) += 1;
        }
        counts
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('\n')?;
        f.write_str(&self.diagram())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.board_fen())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Board, ParseBoardError> {
        Board::from_board_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    #[test]
    fn test_piece_at() {
        let board = Board::new();
        assert_eq!(board.piece_at(Square::new(6, 0)), Some(Color::White.pawn()));
        assert_eq!(board.piece_at(Square::new(7, 1)), Some(Color::White.knight()));
        assert_eq!(board.piece_at(Square::new(0, 3)), Some(Color::Black.queen()));
        assert_eq!(board.piece_at(Square::new(1, 7)), Some(Color::Black.pawn()));
    }

    #[test]
    fn test_set_piece_at() {
        let mut board = Board::new();
        assert_eq!(board.set_piece_at(Square::new(5, 0), Color::White.pawn()), None);
        assert_eq!(board.piece_at(Square::new(5, 0)), Some(Color::White.pawn()));
        assert_eq!(
            board.set_piece_at(Square::new(0, 0), Color::White.queen()),
            Some(Color::Black.rook())
        );
        assert_eq!(board.remove_piece_at(Square::new(0, 0)), Some(Color::White.queen()));
        assert!(!board.is_occupied(Square::new(0, 0)));
    }

    #[test]
    fn test_new_is_independent() {
        let mut board = Board::new();
        board.remove_piece_at(Square::new(6, 4));
        assert_ne!(board, Board::new());
        assert!(Board::new().is_occupied(Square::new(6, 4)));
    }

    #[test]
    fn test_board_fen() {
        assert_eq!(Board::new().board_fen(), STARTING_FEN);
        assert_eq!(Board::empty().board_fen(), "8/8/8/8/8/8/8/8");
        assert_eq!(STARTING_FEN.parse::<Board>(), Ok(Board::new()));

        let fen = "r3k2r/8/8/3Pp3/8/8/8/R3K2R";
        assert_eq!(fen.parse::<Board>().map(|b| b.board_fen()).as_deref(), Ok(fen));
    }

    #[test]
    fn test_invalid_board_fen() {
        assert_eq!(
            "8/8/8/8/8/8/8".parse::<Board>(),
            Err(ParseBoardError::RowCount)
        );
        assert_eq!(
            "8/8/8/8/8/8/8/8/8".parse::<Board>(),
            Err(ParseBoardError::RowCount)
        );
        assert_eq!(
            "8/8/8/8/7/8/8/8".parse::<Board>(),
            Err(ParseBoardError::RowWidth { row: 4 })
        );
        assert_eq!(
            "8/ppppppppp/8/8/8/8/8/8".parse::<Board>(),
            Err(ParseBoardError::RowWidth { row: 1 })
        );
        assert_eq!(
            "8/8/8/8/8/8/8/7x".parse::<Board>(),
            Err(ParseBoardError::InvalidChar { ch: 'x' })
        );
    }

    #[test]
    fn test_material() {
        let material = Board::new().material();
        assert_eq!(material, ByColor { white: 16, black: 16 });
        assert_eq!(Board::new().pieces().count(), 32);
    }
}
