//! Criterion benchmarks for playback: player ticks, rendering and full
//! headless sessions.

use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};
use sortviz_algos::generate;
use sortviz_bench::{reference_profile, stress_profile};
use sortviz_core::{AlgorithmKind, PlaybackState};
use sortviz_engine::{run_headless, Controller, NullSink, Player, PlayerEvent};
use sortviz_render::TextCanvas;

fn bench_player_ticks(c: &mut Criterion) {
    let controller =
        Controller::new(stress_profile(AlgorithmKind::Insertion, 42), NullSink).unwrap();
    let values = controller.values().to_vec();
    let log = generate(AlgorithmKind::Insertion, &values);

    c.bench_function("player_insertion_200", |b| {
        b.iter(|| {
            let mut player = Player::new(&values, log.clone());
            player.handle(PlayerEvent::Start);
            while player.state() == PlaybackState::Running {
                black_box(player.handle(PlayerEvent::Tick(Duration::ZERO)));
            }
            black_box(player.metrics());
        });
    });
}

fn bench_frame(c: &mut Criterion) {
    let mut controller =
        Controller::new(stress_profile(AlgorithmKind::Merge, 42), NullSink).unwrap();
    controller.step();
    let canvas = TextCanvas::new(24);

    c.bench_function("frame_200", |b| {
        b.iter(|| black_box(controller.frame()));
    });
    c.bench_function("canvas_200x24", |b| {
        let frame = controller.frame();
        b.iter(|| black_box(canvas.draw(&frame)));
    });
}

fn bench_headless_session(c: &mut Criterion) {
    c.bench_function("headless_quick_60", |b| {
        b.iter(|| {
            let controller =
                Controller::new(reference_profile(AlgorithmKind::Quick, 42), NullSink).unwrap();
            black_box(run_headless(controller).metrics());
        });
    });
}

criterion_group!(
    benches,
    bench_player_ticks,
    bench_frame,
    bench_headless_session
);
criterion_main!(benches);
