use criterion::{black_box, criterion_group, criterion_main, Criterion};
use isobot::board::{Board, Move};
use isobot::search::alphabeta::AlphaBetaSearcher;
use isobot::search::eval::blended_score;
use isobot::search::minimax::MinimaxSearcher;
use isobot::search::Clock;

fn bench_search(c: &mut Criterion) {
    let board = Board::with_positions(7, 7, Move::new(3, 3), Move::new(1, 1));
    c.bench_function("alphabeta_depth_4_midboard", |b| {
        b.iter(|| {
            let mut s = AlphaBetaSearcher::new(blended_score, Clock::unlimited());
            let r = s.search(black_box(&board), 4).expect("unlimited clock");
            black_box(r.nodes)
        })
    });
    c.bench_function("minimax_depth_3_midboard", |b| {
        b.iter(|| {
            let mut s = MinimaxSearcher::new(blended_score, Clock::unlimited());
            let r = s.search(black_box(&board), 3).expect("unlimited clock");
            black_box(r.nodes)
        })
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
