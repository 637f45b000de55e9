use std::hint::black_box;

use awb::aggregate::recompute;
use awb::form::ShipmentForm;
use awb::preview::render_with;
use awb::FormConfig;
use criterion::{criterion_group, criterion_main, Criterion, Throughput};

/// Returns a form with every dimension line in use
fn full_form(config: &FormConfig) -> ShipmentForm {
    let mut form = ShipmentForm::new(config);
    while form.dimensions.add().is_ok() {}

    for (i, line) in form.dimensions.iter_mut().enumerate() {
        line.pieces.set((i + 1).to_string());
        line.length.set("120.5");
        line.width.set("80");
        line.height.set("95.25");
    }

    if let Some(line) = form.goods.rate_lines.get_mut(0) {
        line.pieces.set("25");
        line.weight.set("812.4");
        line.chargeable_weight.set("1250");
        line.rate.set("3.85");
    }

    form
}

/// Benchmark recomputing and rendering after an edit
fn bench_edit(c: &mut Criterion) {
    let config = FormConfig::default();
    let form = full_form(&config);
    let mut group = c.benchmark_group("edit");

    group.throughput(Throughput::Elements(form.dimensions.len() as u64));

    group.bench_function("recompute", |b| b.iter(|| recompute(black_box(&form))));

    let aggregates = recompute(&form);
    group.bench_function("render", |b| {
        b.iter(|| render_with(&config, black_box(&form), black_box(&aggregates)))
    });

    group.bench_function("recompute and render", |b| {
        b.iter(|| {
            let form = black_box(&form);
            render_with(&config, form, &recompute(form))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_edit);
criterion_main!(benches);
