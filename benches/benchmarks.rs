use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use awk_corpus::{scan, transform};

/// Build an AWK-ish source of roughly `lines` lines, mixing the three
/// protected constructs with plain code.
fn synthetic_program(lines: usize) -> String {
    (0..lines)
        .map(|i| match i % 4 {
            0 => format!("/pat{}/ {{ count{} += 1 }}", i, i),
            1 => format!("$1 ~ /^[0-9]{{1,{}}}$/ {{ sum += $1 }}", (i % 8) + 1),
            2 => format!("{{ print \"row/{}\", $0 }}", i),
            _ => format!("# note {} with /slashes/ inside", i),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ============ Scanner Benchmarks ============

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");

    let simple = r#"/error/ { count++ } END { print count }"#;
    group.bench_function("simple_program", |b| {
        b.iter(|| scan(black_box(simple)))
    });

    let complex = r#"
        BEGIN {
            FS = ":"
            count = 0
        }
        /pattern/ {
            for (i = 1; i <= NF; i++) {
                if ($i ~ /[0-9]+/) {
                    sum += $i
                    count++
                }
            }
        }
        # totals are printed once, slash-free or not
        END {
            if (count > 0) {
                printf "Average: %.2f\n", sum / count
            }
        }
    "#;
    group.bench_function("complex_program", |b| {
        b.iter(|| scan(black_box(complex)))
    });

    group.finish();
}

// ============ Transform Benchmarks ============

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");

    // Regex-dense source, mostly re-delimited output
    let regex_heavy = synthetic_program(200);
    group.bench_function("regex_heavy", |b| {
        b.iter(|| transform(black_box(&regex_heavy)))
    });

    // No regex literals at all, output is a straight copy
    let copy_only: String = (0..200)
        .map(|i| format!("{{ total[{}] = $2 \"-\" $3 }}", i))
        .collect::<Vec<_>>()
        .join("\n");
    group.bench_function("copy_only", |b| {
        b.iter(|| transform(black_box(&copy_only)))
    });

    // Strings and comments everywhere, slashes all protected
    let protected: String = (0..200)
        .map(|i| format!("{{ print \"a/b/{}\" }} # c/d/{}", i, i))
        .collect::<Vec<_>>()
        .join("\n");
    group.bench_function("protected_slashes", |b| {
        b.iter(|| transform(black_box(&protected)))
    });

    group.finish();
}

// ============ Throughput Benchmarks ============

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("throughput");

    for size in [100, 1000, 10000] {
        let source = synthetic_program(size);

        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::new("transform", size), &source, |b, source| {
            b.iter(|| transform(black_box(source)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scan, bench_transform, bench_throughput);

criterion_main!(benches);
