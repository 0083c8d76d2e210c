use criterion::{black_box, criterion_group, criterion_main, Criterion};
use noise_weave::sketch::{Sketch, SketchVariant};
use noise_weave::surface::RecordingSurface;

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("Grid Builder");

    for variant in SketchVariant::ALL {
        group.bench_function(format!("build_{}", variant.label()), |b| {
            b.iter(|| {
                black_box(Sketch::for_variant(variant, black_box(42)));
            });
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("Frame Renderer");

    for variant in SketchVariant::ALL {
        group.bench_function(format!("render_{}", variant.label()), |b| {
            let mut sketch = Sketch::for_variant(variant, 42);
            let mut surface = RecordingSurface::new();
            let mut frame = 0;
            b.iter(|| {
                surface.clear();
                sketch.render(&mut surface, frame, false);
                frame += 1;
                black_box(surface.stroke_count());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_render);
criterion_main!(benches);
