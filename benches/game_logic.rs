use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{get_shape, rotate, GameState, Grid};
use blockfall::types::{Action, PieceKind, GRID_HEIGHT};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if state.is_game_over() {
                state = GameState::new(12345);
            }
            black_box(state.tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut grid = Grid::new();
            for row in 16..GRID_HEIGHT as i8 {
                grid.fill_row(row, PieceKind::I);
            }
            black_box(grid.clear_full_rows());
        })
    });
}

fn bench_drop_and_lock(c: &mut Criterion) {
    c.bench_function("drop_and_lock", |b| {
        let mut state = GameState::new(12345);
        b.iter(|| {
            if state.is_game_over() {
                state = GameState::new(12345);
            }
            let before = state.pieces_locked();
            while state.pieces_locked() == before && !state.is_game_over() {
                state.handle_input(Action::SoftDrop);
            }
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            black_box(state.handle_input(Action::MoveLeft));
            black_box(state.handle_input(Action::MoveRight));
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    let t = get_shape(PieceKind::T);

    c.bench_function("rotate_matrix", |b| b.iter(|| rotate(black_box(&t))));
    c.bench_function("rotate_active", |b| {
        b.iter(|| black_box(state.handle_input(Action::RotateCw)))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_drop_and_lock,
    bench_move,
    bench_rotate
);
criterion_main!(benches);
