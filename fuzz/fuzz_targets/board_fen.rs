#![no_main]

use libfuzzer_sys::fuzz_target;
use tapchess::Board;

fuzz_target!(|data: &str| {
    if let Ok(board) = data.parse::<Board>() {
        let roundtripped: Board = board.board_fen().parse().expect("roundtrip");
        assert_eq!(board, roundtripped);
    }
});
