use criterion::{black_box, criterion_group, criterion_main, Criterion};
use classic_tetris::core::{Board, GameSnapshot, GameState};
use classic_tetris::term::{FrameBuffer, GameView, Viewport};
use classic_tetris::types::{PieceKind, BOARD_WIDTH};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::in_memory(12345);
    state.start();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if !state.phase().is_running() {
                state.start();
            }
            state.tick(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let color = Some(PieceKind::I.color());
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..BOARD_WIDTH as i8 {
                    board.set(x, y, color);
                }
            }
            black_box(board.clear_completed_lines());
        })
    });
}

fn bench_move_down(c: &mut Criterion) {
    let mut state = GameState::in_memory(12345);
    state.start();

    c.bench_function("move_down", |b| {
        b.iter(|| {
            if !state.move_down() {
                state.start();
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::in_memory(12345);
    state.start();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            black_box(state.rotate());
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut state = GameState::in_memory(12345);
    state.start();
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_and_render", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            view.render_into(black_box(&snap), viewport, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_move_down,
    bench_rotate,
    bench_render
);
criterion_main!(benches);
