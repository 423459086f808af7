//! `othello_core::engine` の性能計測（合法手判定、着手適用）。

use core::hint::black_box;
use criterion::BatchSize;
use criterion::Criterion;
use othello_core::engine;

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// `Board::apply_move` を計測する。
fn bench_apply_move(criterion: &mut Criterion) {
    let target = engine::Position::new(2, 3);

    criterion.bench_function("engine/apply_move_initial", |bench| {
        bench.iter_batched(
            engine::Board::initial,
            |mut board| black_box(board.apply_move(engine::Color::Black, target)),
            BatchSize::SmallInput,
        );
    });
}

/// `Board::legal_moves` を計測する。
fn bench_legal_moves(criterion: &mut Criterion) {
    criterion.bench_function("engine/legal_moves_initial", |bench| {
        bench.iter(|| black_box(engine::Board::initial().legal_moves(engine::Color::Black)));
    });
}

/// `Game::submit_move` の受理から状態再評価までを計測する。
fn bench_submit_move(criterion: &mut Criterion) {
    criterion.bench_function("engine/submit_move_initial", |bench| {
        bench.iter_batched(
            engine::Game::initial,
            |mut game| black_box(game.submit_move(engine::Color::Black, 2, 3)),
            BatchSize::SmallInput,
        );
    });
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();

    bench_apply_move(&mut criterion);
    bench_legal_moves(&mut criterion);
    bench_submit_move(&mut criterion);

    criterion.final_summary();
}
