//! secp384r1 field element benchmarks

use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use hex_literal::hex;
use p384_core::{Elem, Point, elem_inv, point_select_w5};
use std::hint::black_box;

fn test_field_element_x() -> Elem {
    Elem::from_be_bytes(&hex!(
        "c2b47944fb5de342d03285880177ca5f7d0f2fcad7678cce4229d6e1932fcac11bfc3c3e97d942a3c56bf34123013dbf"
    ))
    .unwrap()
    .to_mont()
}

fn test_field_element_y() -> Elem {
    Elem::from_be_bytes(&hex!(
        "37257906a8223866eda0743c519616a76a758ae58aee81c5fd35fbf3a855b7754a36d4a0672df95d6c44a81cf7620c2d"
    ))
    .unwrap()
    .to_mont()
}

fn bench_field_element_add<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let x = test_field_element_x();
    let y = test_field_element_y();
    group.bench_function("add", |b| b.iter(|| black_box(&x).add(&y)));
}

fn bench_field_element_sub<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let x = test_field_element_x();
    let y = test_field_element_y();
    group.bench_function("sub", |b| b.iter(|| black_box(&x).sub(&y)));
}

fn bench_field_element_halve<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let x = test_field_element_x();
    group.bench_function("halve", |b| b.iter(|| black_box(&x).halve()));
}

fn bench_field_element_mul<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let x = test_field_element_x();
    let y = test_field_element_y();
    group.bench_function("mul", |b| b.iter(|| black_box(&x).mul_mont(&y)));
}

fn bench_field_element_square<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let x = test_field_element_x();
    group.bench_function("square", |b| b.iter(|| black_box(&x).sqr_mont()));
}

fn bench_field_element_invert<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let x = test_field_element_x();
    group.bench_function("invert", |b| b.iter(|| elem_inv(black_box(&x))));
}

fn bench_point_select<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let x = test_field_element_x();
    let y = test_field_element_y();
    let mut table = [Point::IDENTITY_LIKE; 16];
    for (i, entry) in table.iter_mut().enumerate() {
        let z = if i % 2 == 0 { x } else { y };
        *entry = Point { x, y, z };
    }
    group.bench_function("select_w5", |b| {
        b.iter(|| point_select_w5(&table, black_box(11)))
    });
}

fn bench_field_element(c: &mut Criterion) {
    let mut group = c.benchmark_group("field element operations");
    bench_field_element_add(&mut group);
    bench_field_element_sub(&mut group);
    bench_field_element_halve(&mut group);
    bench_field_element_mul(&mut group);
    bench_field_element_square(&mut group);
    bench_field_element_invert(&mut group);
    group.finish();

    let mut group = c.benchmark_group("point table operations");
    bench_point_select(&mut group);
    group.finish();
}

criterion_group!(benches, bench_field_element);
criterion_main!(benches);
