use criterion::{Criterion, criterion_group, criterion_main};
use drag_pie::api::{DragPie, DragPieConfig};
use drag_pie::core::{ArcGenerator, Category, PieLayout, Point, Segment, Vec2};
use drag_pie::render::{NullRenderer, ShapeKey, SvgRenderer};
use std::hint::black_box;

fn sample_data(segments: usize, categories: usize) -> Vec<Segment> {
    (0..segments)
        .map(|i| {
            let categories = (0..categories).map(|j| {
                let value = 5.0 + ((i * 7 + j * 3) % 40) as f64;
                Category::new(format!("c{j}"), value)
            });
            Segment::new(format!("s{i}"), format!("Segment {i:03}"), 10.0 + i as f64)
                .with_categories(categories)
        })
        .collect()
}

fn bench_pie_layout_1k(c: &mut Criterion) {
    let values: Vec<f64> = (0..1_000).map(|i| 1.0 + (i % 97) as f64).collect();

    c.bench_function("pie_layout_1k", |b| {
        b.iter(|| {
            let _ = PieLayout::default().arcs(black_box(&values), |left, right| left.cmp(&right));
        })
    });
}

fn bench_rounded_arc_path(c: &mut Criterion) {
    let generator = ArcGenerator::new(0.0, 100.0).with_corner_radius(8.0);

    c.bench_function("rounded_arc_path", |b| {
        b.iter(|| {
            let _ = generator.path(black_box(0.3), black_box(2.1));
        })
    });
}

fn bench_refresh_null_renderer(c: &mut Criterion) {
    let mut chart = DragPie::new(
        NullRenderer::default(),
        sample_data(24, 6),
        DragPieConfig::default().with_segment_labels(true),
    )
    .expect("chart init");

    c.bench_function("refresh_24x6_null_renderer", |b| {
        b.iter(|| {
            chart.refresh().expect("refresh");
        })
    });
}

fn bench_drag_tick_svg_renderer(c: &mut Criterion) {
    let mut chart = DragPie::new(
        SvgRenderer::new(),
        sample_data(24, 6),
        DragPieConfig::default().with_segment_bounds(1.0, 1_000_000.0),
    )
    .expect("chart init");
    chart
        .drag_start(&ShapeKey::segment("s3"))
        .expect("drag start");

    c.bench_function("drag_tick_24x6_svg_renderer", |b| {
        let mut sign = 1.0;
        b.iter(|| {
            sign = -sign;
            let _ = chart
                .drag_move(black_box(Vec2::new(sign, 0.0)), Point::ZERO)
                .expect("drag move");
        })
    });
}

criterion_group!(
    benches,
    bench_pie_layout_1k,
    bench_rounded_arc_path,
    bench_refresh_null_renderer,
    bench_drag_tick_svg_renderer
);
criterion_main!(benches);
