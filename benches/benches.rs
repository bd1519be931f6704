use iai::black_box;
use tapchess::{Board, Game, Snapshot, Square, SquareList};

fn bench_press_game() -> Game {
    let presses = [
        (6, 4), (4, 4), (1, 4), (3, 4), (7, 6), (5, 5), (0, 1), (2, 2),
        (7, 5), (4, 2), (0, 6), (2, 5), (5, 5), (3, 6), (1, 3), (3, 3),
        (4, 4), (3, 3), (2, 5), (3, 3), (3, 6), (1, 5), (0, 4), (1, 5),
        (7, 3), (5, 5), (1, 5), (0, 6), (7, 7), (7, 5), (0, 6), (0, 7),
    ];

    let mut game = black_box(Game::new());
    for (row, col) in black_box(presses) {
        game.press(Square::new(row, col));
    }
    game
}

fn bench_press_square_snapshots() -> Snapshot {
    let mut game = black_box(Game::new());
    game.press_square(7, 1);
    game.press_square(5, 2);
    game.press_square(0, 6);
    game.press_square(2, 5)
}

fn bench_targets() -> SquareList {
    let mut game = black_box(Game::new());
    game.press(Square::new(7, 3));
    black_box(&game).targets()
}

fn bench_board_fen() -> Board {
    let fen = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/5N2/PPPP1PPP/RNBQ1RK1";
    fen.parse::<Board>().expect("valid board")
}

fn bench_reset() -> Snapshot {
    let mut game = bench_press_game();
    game.reset()
}

iai::main!(
    bench_press_game,
    bench_press_square_snapshots,
    bench_targets,
    bench_board_fen,
    bench_reset,
);
