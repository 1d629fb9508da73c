//! Benchmarks for the wire codec and paint path.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use anigram::{
    animation::format,
    model::{CELL_COUNT, Color, GRID_SIDE},
    schema::{AnimationRecord, EditorConfig},
    session::{EditSession, PointerInput, TextSurface},
};

fn wire_data(frames: usize) -> String {
    (0..frames * CELL_COUNT)
        .map(|i| Color::from_index((i % 4) as u8).code())
        .collect()
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for frames in [1, 16, 128, 1024] {
        let data = wire_data(frames);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_frames", frames)),
            &data,
            |b, data| {
                b.iter(|| format::decode(black_box(data)));
            },
        );
    }

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for frames in [1, 16, 128, 1024] {
        let decoded = format::decode(&wire_data(frames));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_frames", frames)),
            &decoded,
            |b, decoded| {
                b.iter(|| format::encode(black_box(decoded)));
            },
        );
    }

    group.finish();
}

fn bench_paint_stroke(c: &mut Criterion) {
    let config = EditorConfig::default();
    let record = AnimationRecord::new("bench", wire_data(8));
    let mut session = match EditSession::new(&record, &config, TextSurface::new(&config)) {
        Ok(session) => session,
        Err(e) => panic!("bench session: {e}"),
    };
    session.select_color(Color::Dark);
    let size = f64::from(config.cell_size);

    c.bench_function("paint_stroke_diagonal", |b| {
        b.iter(|| {
            session.pointer_down(PointerInput::new(0.0, 0.0));
            for i in 0..GRID_SIDE * 4 {
                let p = i as f64 * size / 4.0;
                session.pointer_move(black_box(PointerInput::new(p, p)));
            }
            session.pointer_up();
        });
    });
}

criterion_group!(benches, bench_decode, bench_encode, bench_paint_stroke);
criterion_main!(benches);
