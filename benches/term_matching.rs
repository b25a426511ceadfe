use std::hint::black_box;

use code_recents_provider::{RawHistoryRecord, filter_entries};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

fn generate_records(num_records: usize) -> Vec<RawHistoryRecord> {
    (0..num_records)
        .map(|i| {
            let record = RawHistoryRecord::folder(format!("file:///home/u/src/project-{}", i));
            if i % 2 == 0 { record.with_label(format!("Project {}", i)) } else { record }
        })
        .collect()
}

fn bench_filter_entries(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_entries");

    let scenarios: Vec<(&str, Vec<&str>)> = vec![
        ("no_terms", vec![]),
        ("single_term", vec!["project-4"]),
        ("miss", vec!["zzz"]),
        ("many_terms", vec!["alpha", "beta", "gamma", "Project 9"]),
    ];

    for size in [100, 1_000, 10_000].iter() {
        let records = generate_records(*size);
        group.throughput(Throughput::Elements(*size as u64));

        for (name, terms) in &scenarios {
            group.bench_with_input(BenchmarkId::new(*name, size), size, |b, _| {
                b.iter(|| filter_entries(black_box(&records), black_box(terms.as_slice())));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_filter_entries);
criterion_main!(benches);
