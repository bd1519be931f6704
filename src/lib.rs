//! Board state and move legality for chess played by pressing squares.
//!
//! A [`Game`] owns the board, the side to move, the currently selected
//! piece, a move counter and the list of captured pieces. A user interface
//! forwards every press on a square and renders the returned state.
//!
//! # Examples
//!
//! Play 1. e4 by pressing the pawn and then its destination:
//!
//! ```
//! use tapchess::{Color, Game, Square};
//!
//! let mut game = Game::new();
//!
//! let snapshot = game.press_square(6, 4);
//! assert_eq!(snapshot.selection, Some(Square::new(6, 4)));
//!
//! let snapshot = game.press_square(4, 4);
//! assert_eq!(snapshot.board.piece_at(Square::new(4, 4)), Some(Color::White.pawn()));
//! assert_eq!(snapshot.turn, Color::Black);
//! assert_eq!(snapshot.move_number.get(), 2);
//! ```
//!
//! Every press has a defined outcome, illegal moves are simply rejected:
//!
//! ```
//! # use tapchess::{Game, Press, Square};
//! let mut game = Game::new();
//!
//! // Black may not move first.
//! assert_eq!(game.press(Square::new(1, 4)), Press::Ignored(Square::new(1, 4)));
//!
//! // Knights jump.
//! game.press(Square::new(7, 1));
//! assert!(game.press(Square::new(5, 2)).is_move());
//! ```
//!
//! Only pawn pushes, knight jumps and rook slides are validated, see
//! [`rules`]. Check, castling, en passant and promotion are not
//! implemented.
//!
//! # Feature flags
//!
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   [`Snapshot`] and the types it is made of.
//! * `arbitrary`: Implements
//!   [`arbitrary::Arbitrary`](https://docs.rs/arbitrary/1/arbitrary/trait.Arbitrary.html)
//!   for vocabulary types.
//!
//! # Logging
//!
//! Selections and ignored presses are reported as `trace` events, moves,
//! rejections and resets as `debug` events, using
//! [`tracing`](https://docs.rs/tracing/0.1/tracing/).

#![doc(html_root_url = "https://docs.rs/tapchess/0.1.0")]
#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

mod color;
mod game;
mod role;
mod square;
mod types;

pub mod board;
pub mod rules;

pub use board::{Board, ParseBoardError};
pub use color::{ByColor, ByColorIter, Color, ParseColorError};
pub use game::{Game, Press, Setup, Snapshot};
pub use role::{ByRole, Role};
pub use rules::Rule;
pub use square::{ParseSquareError, Square, SquareList};
pub use types::{CaptureMode, Piece};
