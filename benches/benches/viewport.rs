// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use lineage_view::{PointerButton, ViewportConfig, ViewportController};

fn controller() -> ViewportController {
    let mut view = ViewportController::new(Size::new(1280.0, 800.0), ViewportConfig::default())
        .unwrap_or_else(|err| panic!("default viewport config rejected: {err}"));
    view.on_layout(Size::new(4000.0, 3000.0).to_rect());
    view
}

fn bench_viewport(c: &mut Criterion) {
    let mut group = c.benchmark_group("lineage_view");

    for &events in &[16_u64, 256, 4_096] {
        group.bench_function(format!("trackpad_burst(events={events})"), |b| {
            b.iter_batched(
                controller,
                |mut view| {
                    for i in 0..events {
                        // Alternate direction so the zoom never pins at a limit.
                        let delta = if (i / 64) % 2 == 0 { -3.0 } else { 3.0 };
                        view.wheel(delta, Point::new(640.0, 400.0), i * 4);
                    }
                    view.flush_wheel(events * 4 + 1_000);
                    black_box(view.revision());
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("pointer_pan(moves={events})"), |b| {
            b.iter_batched(
                controller,
                |mut view| {
                    view.pointer_down(Point::new(10.0, 10.0), PointerButton::Primary);
                    for i in 0..events {
                        let t = i as f64;
                        view.pointer_move(Point::new(10.0 + t, 10.0 - t * 0.5));
                    }
                    view.pointer_up();
                    black_box(view.grid_offset());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_viewport);
criterion_main!(benches);
