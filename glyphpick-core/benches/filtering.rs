use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glyphpick_core::{Catalog, Manifest, SelectorPanel};

fn large_catalog(count: usize) -> Catalog {
    (0..count).map(|i| format!("glyph-{}-{}", i % 37, i)).collect()
}

fn bench_builtin_filter(c: &mut Criterion) {
    let manifest = Manifest::builtin().unwrap();
    let catalog: Catalog = manifest.entries().iter().map(|e| e.name.clone()).collect();

    c.bench_function("Catalog::filter_builtin", |b| {
        b.iter(|| catalog.filter(black_box("arrow")))
    });
}

fn bench_page_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("SelectorPanel::page_window");
    for count in [500usize, 1500, 5000] {
        let mut panel = SelectorPanel::new(large_catalog(count));
        panel.set_search_term("1");
        panel.set_page(2);
        group.bench_with_input(BenchmarkId::from_parameter(count), &panel, |b, panel| {
            b.iter(|| black_box(panel.page_window().len()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_builtin_filter, bench_page_window);
criterion_main!(benches);
