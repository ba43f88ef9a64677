use criterion::{black_box, criterion_group, criterion_main, Criterion};

use url_canon::{canonicalize_with, is_canonical, CanonicalizeOptions};

pub fn criterion_benchmark(c: &mut Criterion) {
    let plain = "http://sub.sub.sub.example.com:8080/a/b/c";
    let noisy = concat!(
        "HTTPS://user:pw@Sub.Example.com:8080/a/b/c/%30/%31/%32%33%34",
        "/Red%2C%20Ros%C3%A9 14%/%g1%2A//",
        "/\u{03B1}\u{03B2}\u{03B3}/%CE%B1%CE%B2%CE%B3/\u{03B1}\u{03B2}\u{03B3}",
        "?k1=v1&k2=v2&k3=%7Ev3#fragment"
    );
    let unambiguous = CanonicalizeOptions::new();
    let ambiguous = CanonicalizeOptions::ambiguous();
    let split = CanonicalizeOptions::split_high_order();

    c.bench_function("canonicalize plain URL", |b| {
        b.iter(|| canonicalize_with(black_box(plain), &unambiguous))
    });

    c.bench_function("canonicalize noisy URL", |b| {
        b.iter(|| {
            (
                canonicalize_with(black_box(noisy), &unambiguous),
                canonicalize_with(black_box(noisy), &ambiguous),
                canonicalize_with(black_box(noisy), &split),
            )
        })
    });

    let canonical = canonicalize_with(noisy, &unambiguous).expect("valid URL");
    c.bench_function("check canonical URL", |b| {
        b.iter(|| is_canonical(black_box(&canonical), &unambiguous))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
