use criterion::{black_box, criterion_group, criterion_main, Criterion};
use overloadgen::{write_action_tests, write_clamp_overloads, write_func_tests, FixedLiterals};

fn bench_generation_passes(c: &mut Criterion) {
    c.bench_function("action_tests_full_pass", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(4096);
            let mut literals = FixedLiterals::new(vec![0x1234, 0xbeef, 0x42]);
            write_action_tests(&mut out, &mut literals).unwrap();
            black_box(out)
        })
    });

    c.bench_function("func_tests_full_pass", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(4096);
            let mut literals = FixedLiterals::new(vec![0x1234, 0xbeef, 0x42]);
            write_func_tests(&mut out, &mut literals).unwrap();
            black_box(out)
        })
    });

    c.bench_function("clamp_overloads_full_pass", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(4096);
            write_clamp_overloads(&mut out).unwrap();
            black_box(out)
        })
    });
}

criterion_group!(benches, bench_generation_passes);
criterion_main!(benches);
