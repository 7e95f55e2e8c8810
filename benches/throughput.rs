use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use formatbench::{adapter_for, generate_dataset, BenchConfig, Format};
use tempfile::tempdir;

fn benchmark_formats(c: &mut Criterion) {
    let temp_dir = tempdir().unwrap();
    let config = BenchConfig {
        out_dir: temp_dir.path().to_path_buf(),
        ..Default::default()
    };
    let records = generate_dataset(100_000);

    let mut group = c.benchmark_group("formats");
    group.sample_size(10);

    for format in Format::ALL {
        let adapter = adapter_for(format, &config);
        let path = config.output_path(format);

        group.bench_with_input(BenchmarkId::new("write", format), &records, |b, records| {
            b.iter(|| adapter.write(records, &path).unwrap())
        });

        adapter.write(&records, &path).unwrap();
        group.bench_function(BenchmarkId::new("read", format), |b| {
            b.iter(|| adapter.read(&path).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_formats);
criterion_main!(benches);
