use proptest::prelude::*;
use tapchess::{Board, CaptureMode, Color, Game, Press, Snapshot, Square};

/// A press is either on a piece of the side to move (chosen among them by
/// index) or on any square, so that generated games actually progress.
#[derive(Copy, Clone, Debug)]
enum Tap {
    Own(usize),
    Any(Square),
}

fn tap() -> impl Strategy<Value = Tap> {
    prop_oneof![
        3 => any::<usize>().prop_map(Tap::Own),
        1 => (0u8..8, 0u8..8).prop_map(|(row, col)| Tap::Any(Square::new(row, col))),
    ]
}

fn capture_mode() -> impl Strategy<Value = CaptureMode> {
    prop_oneof![Just(CaptureMode::Permissive), Just(CaptureMode::OpponentOnly)]
}

fn resolve(tap: Tap, game: &Game) -> Square {
    match tap {
        Tap::Any(sq) => sq,
        Tap::Own(n) => {
            let own: Vec<Square> = game
                .board()
                .pieces()
                .filter(|&(_, piece)| piece.color == game.turn())
                .map(|(sq, _)| sq)
                .collect();
            if game.selection().is_some() || own.is_empty() {
                Square::from_index(n % 64).expect("index in range")
            } else {
                own[n % own.len()]
            }
        }
    }
}

fn total_pieces(game: &Game) -> usize {
    game.board().pieces().count() + game.captured().iter().map(|c| c.len()).sum::<usize>()
}

fn check_press(game: &mut Game, sq: Square, moves: &mut u32) -> Result<(), TestCaseError> {
    let mode = game.capture_mode();
    let before = game.snapshot();
    let targets = game.targets();
    let press = game.press(sq);

    match press {
        Press::Moved {
            piece,
            from,
            to,
            capture,
        } => {
            *moves += 1;
            prop_assert_eq!(before.selection, Some(from));
            prop_assert!(targets.contains(&to));
            prop_assert_eq!(game.turn(), !before.turn);
            prop_assert_eq!(piece.color, before.turn);
            prop_assert_eq!(game.board().piece_at(to), Some(piece));
            prop_assert_eq!(game.board().piece_at(from), None);
            prop_assert_eq!(capture, before.board.piece_at(to));

            for color in Color::ALL {
                let grew = game.captured().get(color).len() - before.captured.get(color).len();
                let expected = usize::from(capture.is_some_and(|c| c.color == color));
                prop_assert_eq!(grew, expected);
            }
            if let Some(captured) = capture {
                let ledger = game.captured();
                prop_assert_eq!(ledger.get(captured.color).last(), Some(&captured));
                if mode == CaptureMode::OpponentOnly {
                    prop_assert_ne!(captured.color, piece.color);
                }
            }
        }
        Press::Rejected { from, to } => {
            prop_assert_eq!(before.selection, Some(from));
            prop_assert!(!targets.contains(&to));
            prop_assert_eq!(game.board(), &before.board);
            prop_assert_eq!(game.turn(), before.turn);
        }
        Press::Selected(selected) => {
            prop_assert_eq!(before.selection, None);
            prop_assert_eq!(game.selection(), Some(selected));
        }
        Press::Deselected(deselected) => {
            prop_assert_eq!(before.selection, Some(deselected));
            prop_assert_eq!(game.board(), &before.board);
        }
        Press::Ignored(_) => {
            prop_assert_eq!(game.snapshot(), before.clone());
        }
    }

    if !press.is_move() {
        prop_assert_eq!(game.turn(), before.turn);
        prop_assert_eq!(game.move_number(), before.move_number);
        prop_assert_eq!(game.captured().white, before.captured.white.as_slice());
        prop_assert_eq!(game.captured().black, before.captured.black.as_slice());
    }

    if let Some(selected) = game.selection() {
        prop_assert_eq!(game.board().color_at(selected), Some(game.turn()));
    }

    prop_assert_eq!(game.move_number().get(), 1 + *moves);
    prop_assert_eq!(total_pieces(game), 32);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_random_walks(mode in capture_mode(), taps in prop::collection::vec(tap(), 0..600)) {
        let mut game = Game::with_capture_mode(mode);
        let mut moves = 0;

        for tap in taps {
            let sq = resolve(tap, &game);
            check_press(&mut game, sq, &mut moves)?;
        }

        prop_assert_eq!(game.reset(), Snapshot::default());
        prop_assert_eq!(game.reset(), Snapshot::default());
        prop_assert_eq!(game.capture_mode(), mode);
    }
}

#[test]
fn test_snapshot_does_not_alias() {
    let mut game = Game::new();
    let mut snapshot = game.press_square(6, 4);
    snapshot.board.remove_piece_at(Square::new(6, 4));
    snapshot.captured.white.push(Color::White.queen());

    assert_eq!(game.board(), &Board::new());
    assert!(game.captured().white.is_empty());
    assert_eq!(game.selection(), Some(Square::new(6, 4)));
}

#[test]
fn test_rook_paths() {
    // Rook in the middle of an empty board with one blocker on each line.
    let board: Board = "8/3p4/8/8/8/1P1R2p1/8/8".parse().expect("valid board");
    let rook = Square::new(5, 3);

    for to in Square::all().filter(|&to| to != rook) {
        let (rows, cols) = rook.delta(to);
        let on_line = rows == 0 || cols == 0;
        let blocked = tapchess::rules::between(rook, to)
            .iter()
            .any(|&sq| board.is_occupied(sq));

        let mut game = Game::from_setup(
            tapchess::Setup {
                board: board.clone(),
                turn: Color::White,
            },
            CaptureMode::Permissive,
        );
        game.press(rook);
        let press = game.press(to);

        assert_eq!(press.is_move(), on_line && !blocked, "to {to}");
    }
}

#[test]
fn test_knight_geometry() {
    let mut game = Game::new();
    game.press(Square::new(7, 1));
    assert!(!game.press(Square::new(6, 0)).is_move());
    game.press(Square::new(7, 1));
    assert!(game.press(Square::new(5, 0)).is_move());

    let mut game = Game::new();
    game.press(Square::new(7, 1));
    assert!(game.press(Square::new(5, 2)).is_move());
}
