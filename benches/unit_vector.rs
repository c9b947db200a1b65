use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spatial::{Angle, UnitVector2D, Vector2D, XmlSerializable};

fn bench_create(c: &mut Criterion) {
    c.bench_function("unit_vector_create", |b| {
        b.iter(|| UnitVector2D::create(black_box(3.0), black_box(-4.0)))
    });
}

fn bench_angle_algebra(c: &mut Criterion) {
    let a = UnitVector2D::create(1.0, 2.0).unwrap();
    let b = UnitVector2D::create(-3.0, 0.5).unwrap();
    let v = Vector2D::new(4.0, -1.0);

    c.bench_function("unit_vector_angle_to", |bench| {
        bench.iter(|| black_box(a).angle_to(black_box(&b)))
    });
    c.bench_function("unit_vector_signed_angle_to_vector", |bench| {
        bench.iter(|| black_box(a).signed_angle_to(black_box(&v)))
    });
    c.bench_function("unit_vector_rotate", |bench| {
        bench.iter(|| black_box(a).rotate(black_box(Angle::from_degrees(33.0))))
    });
}

fn bench_text_and_xml(c: &mut Criterion) {
    let u = UnitVector2D::create(1.0, 1.0).unwrap();
    let text = u.to_string();
    let xml = u.to_xml_string().unwrap();

    c.bench_function("unit_vector_parse", |b| {
        b.iter(|| UnitVector2D::parse(black_box(&text)))
    });
    c.bench_function("unit_vector_read_xml", |b| {
        b.iter(|| UnitVector2D::read_xml(black_box(&xml)))
    });
}

criterion_group!(benches, bench_create, bench_angle_algebra, bench_text_and_xml);
criterion_main!(benches);
