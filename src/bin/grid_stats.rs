use noise_weave::sketch::{ColorRamp, Sketch, SketchVariant};
use noise_weave::surface::RecordingSurface;

fn main() {
    env_logger::init();

    let seed: u32 = rand::random();
    println!("Seed: {}", seed);

    for variant in SketchVariant::ALL {
        let mut sketch = Sketch::for_variant(variant, seed);
        let config = sketch.config().clone();

        let widths: Vec<f32> = sketch.points().iter().map(|p| p.stroke_width).collect();
        let min = widths.iter().cloned().fold(f32::INFINITY, f32::min);
        let max = widths.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        let avg = widths.iter().sum::<f32>() / widths.len() as f32;
        let fallback = sketch
            .points()
            .iter()
            .filter(|p| p.color == ColorRamp::FALLBACK)
            .count();

        let mut surface = RecordingSurface::new();
        sketch.render(&mut surface, 0, false);

        println!("\n{} ({}x{}):", variant.label(), config.n_cols, config.n_rows);
        println!("  Points: {}", sketch.points().len());
        println!(
            "  Stroke width: min {:.2}, max {:.2}, avg {:.2} (range {:?})",
            min, max, avg, config.line_width_range
        );
        println!("  Fallback colors: {}", fallback);
        println!(
            "  Frame 0: {} strokes, {} curves",
            surface.stroke_count(),
            surface.stroked_curve_count()
        );
    }
}
