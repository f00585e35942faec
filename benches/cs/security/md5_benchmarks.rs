use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use md5lab::{hmac_md5, md5_digest, LengthExtension, Md5};

fn bench_md5_digest(c: &mut Criterion) {
    let mut group = c.benchmark_group("md5_digest");
    for size in [64usize, 1_000, 10_000, 100_000, 1_000_000] {
        let data = vec![0xFFu8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| md5_digest(black_box(data)))
        });
    }
    group.finish();
}

fn bench_md5_update(c: &mut Criterion) {
    let data = vec![0x5Au8; 100_000];
    c.bench_function("md5_update_4k_chunks", |b| {
        b.iter(|| {
            let mut engine = Md5::default();
            for chunk in data.chunks(4096) {
                engine.update(black_box(chunk));
            }
            engine.digest()
        })
    });
}

fn bench_hmac(c: &mut Criterion) {
    let message = vec![0x42u8; 1_000];
    c.bench_function("hmac_md5_1k", |b| {
        b.iter(|| hmac_md5(black_box(b"key"), black_box(&message)))
    });
}

fn bench_length_extension(c: &mut Criterion) {
    let original = vec![0x11u8; 1_000];
    let mac = Md5::new(&original).digest();
    let extension = LengthExtension::new(mac, original.len() as u64);
    c.bench_function("length_extension_64b", |b| {
        b.iter(|| extension.extend(black_box(&[0x22u8; 64])))
    });
}

criterion_group!(
    benches,
    bench_md5_digest,
    bench_md5_update,
    bench_hmac,
    bench_length_extension
);
criterion_main!(benches);
