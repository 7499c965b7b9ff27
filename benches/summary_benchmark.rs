use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use region_explorer::models::BuildingRecord;
use region_explorer::processors::Summarizer;
use region_explorer::readers::BuildingReader;
use std::io::Write;

const CATEGORIES: [&str; 6] = ["House", "Shop", "Church", "School", "Office", "Garage"];

fn create_records(count: usize) -> Vec<BuildingRecord> {
    (0..count)
        .map(|i| {
            BuildingRecord::new(
                CATEGORIES[i % CATEGORIES.len()],
                -1.25 + (i as f64) * 1e-5,
                51.75 + (i as f64) * 1e-5,
                10.0 + (i % 97) as f64,
            )
        })
        .collect()
}

fn benchmark_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");
    let summarizer = Summarizer::new();

    for size in [1_000, 10_000, 100_000] {
        let records = create_records(size);
        let summary = summarizer.summarize(&records).unwrap();
        assert_eq!(summary.len(), CATEGORIES.len() - 1, "House should be excluded");
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| summarizer.summarize(black_box(records)).unwrap())
        });
    }

    group.finish();
}

fn benchmark_read_buildings(c: &mut Criterion) {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "building,longitude,latitude,area").unwrap();
    for record in create_records(10_000) {
        writeln!(
            file,
            "{},{},{},{}",
            record.category, record.longitude, record.latitude, record.area
        )
        .unwrap();
    }

    let reader = BuildingReader::new();
    c.bench_function("read_buildings_10k", |b| {
        b.iter(|| reader.read_buildings(black_box(file.path())).unwrap())
    });
}

criterion_group!(benches, benchmark_summarize, benchmark_read_buildings);
criterion_main!(benches);
