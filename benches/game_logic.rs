use criterion::{black_box, criterion_group, criterion_main, Criterion};
use autotris::core::{Board, GameState};
use autotris::engine::{best_move, AiWeights, BoardFeatures};
use autotris::types::{GameAction, PieceKind};

fn messy_board() -> Board {
    Board::from_rows(&[
        "....T.....",
        "..ZZTT....",
        "J..ZZT..OO",
        "JJJ.IIIIOO",
        "LLL.SS.OOI",
        "L..SS..OOI",
        "IIIIJJJ..I",
    ])
}

fn bench_apply_move(c: &mut Criterion) {
    let mut state = GameState::with_seed(1, 12345);

    c.bench_function("apply_move", |b| {
        b.iter(|| {
            // Left then right so the piece stays in place.
            state.apply_action(black_box(GameAction::MoveLeft));
            state.apply_action(black_box(GameAction::MoveRight));
        })
    });
}

fn bench_apply_rotate(c: &mut Criterion) {
    let mut state = GameState::with_seed(1, 12345);

    c.bench_function("apply_rotate", |b| {
        b.iter(|| {
            state.apply_action(black_box(GameAction::Rotate));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                board.fill_row(y, PieceKind::I);
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let state = GameState::with_seed(1, 12345).with_board(messy_board());

    c.bench_function("hard_drop", |b| b.iter(|| black_box(state.hard_drop())));
}

fn bench_features(c: &mut Criterion) {
    let board = messy_board();

    c.bench_function("board_features", |b| {
        b.iter(|| BoardFeatures::measure(black_box(&board)))
    });
}

fn bench_best_move(c: &mut Criterion) {
    let state = GameState::with_seed(1, 12345).with_board(messy_board());
    let weights = AiWeights::default();

    c.bench_function("best_move", |b| {
        b.iter(|| best_move(black_box(&state), &weights))
    });
}

criterion_group!(
    benches,
    bench_apply_move,
    bench_apply_rotate,
    bench_line_clear,
    bench_hard_drop,
    bench_features,
    bench_best_move
);
criterion_main!(benches);
