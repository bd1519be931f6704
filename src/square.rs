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

use std::{error::Error, fmt, str::FromStr};

use arrayvec::ArrayVec;

/// A list of squares with room for the whole board.
pub type SquareList = ArrayVec<Square, 64>;

/// Error when parsing an invalid square.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSquareError;

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid square")
    }
}

impl Error for ParseSquareError {}

/// A square of the 8x8 board, addressed by row and column.
///
/// Row 0 is black's back rank and row 7 is white's back rank. Columns
/// count from 0 to 7, left to right as seen from white.
///
/// The textual form is two digits, row then column.
///
/// # Examples
///
/// ```
/// use tapchess::Square;
///
/// let sq = Square::new(6, 4);
/// assert_eq!(sq.row(), 6);
/// assert_eq!(sq.col(), 4);
/// assert_eq!(sq.to_string(), "64");
/// assert_eq!("64".parse(), Ok(sq));
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Square(u8);

impl Square {
    /// Gets the square at `row` and `col`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range `0..8`. Use
    /// [`Square::try_new()`] for untrusted input.
    #[track_caller]
    pub fn new(row: u8, col: u8) -> Square {
        Square::try_new(row, col)
            .unwrap_or_else(|| panic!("square out of range: row {row}, col {col}"))
    }

    /// Gets the square at `row` and `col`, or `None` if either is not in
    /// the range `0..8`.
    #[inline]
    pub const fn try_new(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    /// Gets the square with the given row-major index in `0..64`.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Square> {
        if index < 64 {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 >> 3
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.0 & 7
    }

    /// Row-major index in `0..64`.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Tests if the square is rendered in the light tint, which is the case
    /// when `row + col` is even.
    ///
    /// # Examples
    ///
    /// ```
    /// use tapchess::Square;
    ///
    /// assert!(Square::new(0, 0).is_light());
    /// assert!(!Square::new(0, 1).is_light());
    /// assert!(Square::new(7, 7).is_light());
    /// ```
    #[inline]
    pub const fn is_light(self) -> bool {
        (self.row() + self.col()) % 2 == 0
    }

    /// Gets the square `rows` and `cols` steps away, or `None` if that would
    /// leave the board.
    pub fn offset(self, rows: i8, cols: i8) -> Option<Square> {
        let row = i16::from(self.row()) + i16::from(rows);
        let col = i16::from(self.col()) + i16::from(cols);
        Square::try_new(u8::try_from(row).ok()?, u8::try_from(col).ok()?)
    }

    /// Signed row and column difference from `self` to `to`.
    #[inline]
    pub const fn delta(self, to: Square) -> (i8, i8) {
        (
            to.row() as i8 - self.row() as i8,
            to.col() as i8 - self.col() as i8,
        )
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl DoubleEndedIterator<Item = Square> + ExactSizeIterator {
        (0..64).map(Square)
    }

    /// Parses a square from its two ASCII digits.
    ///
    /// # Errors
    ///
    /// Returns [`ParseSquareError`] if `s` is not exactly two digits in
    /// `0..8`.
    pub fn from_ascii(s: &[u8]) -> Result<Square, ParseSquareError> {
        match *s {
            [row @ b'0'..=b'7', col @ b'0'..=b'7'] => Ok(Square::new(row - b'0', col - b'0')),
            _ => Err(ParseSquareError),
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row(), self.col())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.row(), self.col())
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Square, ParseSquareError> {
        Square::from_ascii(s.as_bytes())
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Square {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Square> {
        Ok(Square(u.int_in_range(0..=63)?))
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        u8::size_hint(depth)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Square {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Square {
    fn deserialize<D>(deserializer: D) -> Result<Square, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct SquareVisitor;

        impl serde::de::Visitor<'_> for SquareVisitor {
            type Value = Square;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("two digits, row then column")
            }

            fn visit_str<E>(self, value: &str) -> Result<Square, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(SquareVisitor)
    }
}
