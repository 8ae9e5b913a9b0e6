use criterion::{black_box, criterion_group, criterion_main, Criterion};
use view_router::{props, Route, Router};

fn resolve(c: &mut Criterion) {
    let mut router = Router::new();
    router
        .register([
            Route::new("/", "main", "search"),
            Route::new("/package/:name", "package", "package").with_props(props::spread),
        ])
        .unwrap();

    let urls = [
        "/",
        "/package/libfoo",
        "/package/libfoo?version=2&branch=stable",
    ];

    c.bench_function("resolve", |b| {
        b.iter(|| {
            for url in black_box(&urls) {
                let resolved = black_box(router.resolve(url).unwrap());
                black_box(resolved.props());
            }
        });
    });
}

criterion_group!(benches, resolve);
criterion_main!(benches);
