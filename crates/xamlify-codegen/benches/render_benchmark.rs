//! Rendering benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use xamlify_codegen::{CodeGenerator, Context, XamlGenerator};
use xamlify_core::{Color, Fill, Layer, Options, Project, ShapeStyle, TextStyle};

fn palette(size: u8) -> Vec<Color> {
    (0..size)
        .map(|i| Color::rgb(i, 255 - i, i / 2).named(format!("Color {}", i)))
        .collect()
}

fn export_colors(c: &mut Criterion) {
    let generator = XamlGenerator::new().unwrap();
    let options = Options::new()
        .with_sort_resources(true)
        .with_duplicate_suffix(" Copy");
    let colors = palette(200);
    let project = Project {
        colors: colors.clone(),
        text_styles: vec![],
    };
    let ctx = Context::new(&options, &project);

    c.bench_function("export_colors", |b| {
        b.iter(|| generator.export_styleguide_colors(&ctx, black_box(&colors)))
    });
}

fn render_layers(c: &mut Criterion) {
    let generator = XamlGenerator::new().unwrap();
    let options = Options::new();
    let project = Project {
        colors: palette(200),
        text_styles: vec![TextStyle::new(14.0, 400).named("Body")],
    };
    let ctx = Context::new(&options, &project);

    let label = Layer::text("Body", "Lorem ipsum", TextStyle::new(14.0, 400));
    let frame = Layer::shape("Card", 320.0, 120.0).with_shape_style(ShapeStyle {
        fills: vec![Fill::solid(Color::rgb(199, 56, 99))],
        ..Default::default()
    });

    c.bench_function("render_label", |b| {
        b.iter(|| generator.layer(&ctx, black_box(&label)))
    });
    c.bench_function("render_frame", |b| {
        b.iter(|| generator.layer(&ctx, black_box(&frame)))
    });
}

criterion_group!(benches, export_colors, render_layers);
criterion_main!(benches);
