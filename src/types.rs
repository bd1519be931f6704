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

use std::fmt;

use crate::{color::Color, role::Role};

/// A piece with [`Color`] and [`Role`].
///
/// Pieces are values. Moving a piece relocates it on the
/// [`Board`](crate::Board), the piece itself never changes.
#[allow(missing_docs)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Piece {
    pub color: Color,
    pub role: Role,
}

impl Piece {
    /// Gets the letter of the piece, uppercase for white and lowercase for
    /// black.
    ///
    /// # Examples
    ///
    /// ```
    /// use tapchess::Color;
    ///
    /// assert_eq!(Color::White.knight().char(), 'N');
    /// assert_eq!(Color::Black.queen().char(), 'q');
    /// ```
    pub const fn char(self) -> char {
        match self.color {
            Color::White => self.role.upper_char(),
            Color::Black => self.role.char(),
        }
    }

    pub const fn from_char(ch: char) -> Option<Piece> {
        let Some(role) = Role::from_char(ch) else {
            return None;
        };
        Some(role.of(Color::from_white(ch.is_ascii_uppercase())))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.role)
    }
}

/// `Permissive` or `OpponentOnly`.
///
/// Decides what happens when an otherwise legal move lands on a piece of
/// the mover's own color.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum CaptureMode {
    /// Destination occupancy is not checked. Any occupant of the
    /// destination is captured, including a piece of the mover's own
    /// color, which then ends up in its own color's capture list.
    #[default]
    Permissive,
    /// Moves onto a piece of the mover's own color are rejected.
    OpponentOnly,
}

impl CaptureMode {
    /// Checks whether a piece of color `mover` may land on a square
    /// currently holding `occupant`.
    pub fn allows(self, mover: Color, occupant: Option<Piece>) -> bool {
        match (self, occupant) {
            (CaptureMode::OpponentOnly, Some(piece)) => piece.color != mover,
            _ => true,
        }
    }
}
