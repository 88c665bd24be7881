use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use quince_chess::game_state::game_state::GameState;
use quince_chess::move_generation::legal_move_generator::generate_legal_moves;
use quince_chess::search::searcher::{find_best_move, SearchAlgorithm, ALL_ALGORITHMS};

const MIDGAME_FEN: &str = "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 0 1";

fn algorithm_name(algorithm: SearchAlgorithm) -> &'static str {
    match algorithm {
        SearchAlgorithm::Minimax => "minimax",
        SearchAlgorithm::MinimaxAlphaBeta => "minimax_ab",
        SearchAlgorithm::Negamax => "negamax",
        SearchAlgorithm::NegamaxAlphaBeta => "negamax_ab",
    }
}

fn search_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_depth_3");

    for algorithm in ALL_ALGORITHMS {
        group.bench_with_input(
            BenchmarkId::from_parameter(algorithm_name(algorithm)),
            &algorithm,
            |bencher, &algorithm| {
                let mut game =
                    GameState::from_fen(MIDGAME_FEN).expect("bench FEN should parse");
                let moves = generate_legal_moves(&mut game);
                bencher.iter(|| {
                    find_best_move(black_box(&mut game), black_box(&moves), 3, algorithm)
                        .expect("a move should be recommended")
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, search_benches);
criterion_main!(benches);
