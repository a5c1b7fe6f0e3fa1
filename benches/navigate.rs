use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use rxcatalog::{render, select, CatalogSource, CatalogStore, Category, Format};

fn embedded_store() -> CatalogStore {
    CatalogStore::load(CatalogSource::embedded().unwrap()).unwrap()
}

fn bench_load(c: &mut Criterion) {
    let source = CatalogSource::embedded().unwrap();
    c.bench_function("catalog/load_embedded", |b| {
        b.iter(|| CatalogStore::load(black_box(source.clone())).unwrap());
    });
}

fn bench_select(c: &mut Criterion) {
    let store = embedded_store();
    let mut group = c.benchmark_group("navigate");
    group.throughput(Throughput::Elements(Category::ALL.len() as u64));

    group.bench_function("select_all_categories", |b| {
        b.iter(|| {
            for category in Category::ALL {
                black_box(select(black_box(category), &store).unwrap());
            }
        });
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let store = embedded_store();
    let payload = select(Category::Disease, &store).unwrap();
    let mut group = c.benchmark_group("render");

    for format in Format::ALL {
        group.bench_function(format.as_str(), |b| {
            b.iter(|| render(black_box(&payload), format));
        });
    }

    group.finish();
}

fn bench_fingerprint(c: &mut Criterion) {
    let store = embedded_store();
    c.bench_function("catalog/fingerprint", |b| {
        b.iter(|| black_box(store.fingerprint()));
    });
}

criterion_group!(benches, bench_load, bench_select, bench_render, bench_fingerprint);
criterion_main!(benches);
