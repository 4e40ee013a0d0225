use criterion::{Criterion, black_box, criterion_group, criterion_main};
use cxcalc_calculator::{Complex, OperationKind, evaluate};

fn bench_operations(c: &mut Criterion) {
    let a = Complex::new(3.5, -1.25);
    let b = Complex::new(-0.75, 2.0);

    for kind in OperationKind::ALL {
        c.bench_function(&format!("evaluate_{}", kind.label().to_lowercase()), |bench| {
            bench.iter(|| evaluate(black_box(kind), black_box(a), black_box(b)))
        });
    }
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_operand", |bench| {
        bench.iter(|| black_box("-12.5e-1+3.75J").parse::<Complex>())
    });
}

criterion_group!(benches, bench_operations, bench_parse);
criterion_main!(benches);
