use criterion::{Criterion, black_box, criterion_group, criterion_main};
use impact_vector::{Vector3, Vector4, Vector4i, codec, function};
use std::io::Cursor;

pub fn bench_vector4_dot_product(c: &mut Criterion) {
    let a = Vector4::<f32>::new(1.0, 2.0, 3.0, 4.0);
    let b = Vector4::<f32>::new(-4.0, 3.0, -2.0, 1.0);
    c.bench_function("vector4_dot_product", |bencher| {
        bencher.iter(|| black_box(&a).dot(black_box(&b)));
    });
}

pub fn bench_vector3_normalization(c: &mut Criterion) {
    let v = Vector3::<f64>::new(3.0, -4.0, 12.0);
    c.bench_function("vector3_normalization", |bencher| {
        bencher.iter(|| black_box(&v).normalized());
    });
}

pub fn bench_vector3_refraction(c: &mut Criterion) {
    let v = Vector3::<f64>::new(0.6, -0.8, 0.0);
    let n = Vector3::<f64>::new(0.0, 1.0, 0.0);
    c.bench_function("vector3_refraction", |bencher| {
        bencher.iter(|| function::refract(black_box(&v), black_box(&n), 0.75));
    });
}

pub fn bench_vector4_packing(c: &mut Criterion) {
    let v = Vector4i::new(0x12, 0x34, 0x56, 0x78);
    c.bench_function("vector4_packing", |bencher| {
        bencher.iter(|| {
            let packed = black_box(&v).pack([8, 8, 8, 8]);
            Vector4i::unpack([8, 8, 8, 8], black_box(packed))
        });
    });
}

pub fn bench_vector_slice_codec(c: &mut Criterion) {
    let vectors: Vec<_> = (0..10000)
        .map(|idx| Vector4::<f32>::same(idx as f32))
        .collect();
    c.bench_function("vector_slice_codec", |bencher| {
        bencher.iter(|| {
            let mut bytes = Vec::with_capacity(vectors.len() * Vector4::<f32>::ENCODED_SIZE);
            codec::write_slice_le(&vectors, &mut bytes).unwrap();
            let decoded: Vec<Vector4<f32>> =
                codec::read_slice_le(&mut Cursor::new(&bytes), vectors.len()).unwrap();
            decoded
        });
    });
}

criterion_group!(
    benches,
    bench_vector4_dot_product,
    bench_vector3_normalization,
    bench_vector3_refraction,
    bench_vector4_packing,
    bench_vector_slice_codec
);
criterion_main!(benches);
