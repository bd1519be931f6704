#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tapchess::{CaptureMode, Game, Press, Snapshot, Square};

#[derive(Debug, Arbitrary)]
struct Data {
    mode: CaptureMode,
    presses: Vec<Square>,
}

fuzz_target!(|data: Data| {
    let mut game = Game::with_capture_mode(data.mode);
    let mut moves = 1;

    for sq in data.presses {
        let turn = game.turn();
        let targets = game.targets();

        match game.press(sq) {
            Press::Moved { to, .. } => {
                moves += 1;
                assert!(targets.contains(&to));
                assert_eq!(game.turn(), !turn);
            }
            Press::Rejected { to, .. } => assert!(!targets.contains(&to)),
            _ => assert_eq!(game.turn(), turn),
        }

        if let Some(selected) = game.selection() {
            assert_eq!(game.board().color_at(selected), Some(game.turn()));
        }

        let captured: usize = game.captured().iter().map(|c| c.len()).sum();
        assert_eq!(game.board().pieces().count() + captured, 32);
        assert_eq!(game.move_number().get(), moves);
    }

    assert_eq!(game.reset(), Snapshot::default());
});
