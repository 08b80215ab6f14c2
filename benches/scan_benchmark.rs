use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use repscan::run::scan_fasta;
use repscan::scan::{FrameScan, SortMode};
use std::io::Write;
use tempfile::NamedTempFile;

fn bench_frame_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("FrameScan::new");

    let seq = "ATGCATGCATGC".repeat(128);

    for k in [2, 3, 5, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            b.iter(|| FrameScan::new(black_box(seq.as_str()), k, 0, SortMode::None))
        });
    }

    group.finish();
}

fn bench_sorted_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("FrameScan::new/sorted");

    let seq = "ATGCATGCATGC".repeat(128);

    for mode in [SortMode::None, SortMode::Descending, SortMode::Ascending] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{mode}")),
            &mode,
            |b, &mode| b.iter(|| FrameScan::new(black_box(seq.as_str()), 3, 0, mode)),
        );
    }

    group.finish();
}

fn bench_scan_fasta_small(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_fasta");

    // Create a small test file
    let mut file = NamedTempFile::new().unwrap();
    for i in 0..100 {
        writeln!(file, ">seq{i}").unwrap();
        writeln!(file, "{}", "ACGTACGTACGTACGTACGTACGTACGTACGT".repeat(10)).unwrap();
    }
    let path = file.path().to_path_buf();

    for k in [3, 5, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            b.iter(|| scan_fasta(black_box(&path), black_box(k), 0, SortMode::None))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_frame_scan,
    bench_sorted_scan,
    bench_scan_fasta_small,
);

criterion_main!(benches);
