use bytestr::ByteStr;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn csv_line(fields: usize) -> String {
    let mut line = String::new();
    for i in 0..fields {
        if i > 0 {
            line.push(',');
        }
        line.push_str(&format!("field_{}", i));
    }
    line
}

fn bench_substring(c: &mut Criterion) {
    let mut group = c.benchmark_group("substring");

    for size in [100, 1000, 10000].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::new("middle_half", size), size, |b, &size| {
            let s = ByteStr::new(vec![b'x'; size]);
            let quarter = (size / 4) as isize;

            b.iter(|| black_box(s.substring(quarter, -quarter).unwrap()));
        });
    }
    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");

    for size in [100, 1000, 10000].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::new("needle_at_end", size), size, |b, &size| {
            let mut data = vec![b'x'; size];
            let tail = data.len() - 6;
            data[tail..].copy_from_slice(b"needle");
            let s = ByteStr::new(data);

            b.iter(|| black_box(s.find("needle")));
        });
    }
    group.finish();
}

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");

    for fields in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*fields as u64));
        group.bench_with_input(
            BenchmarkId::new("comma_fields", fields),
            fields,
            |b, &fields| {
                let s = ByteStr::new(csv_line(fields));

                b.iter(|| black_box(s.split(",").unwrap()));
            },
        );
    }
    group.finish();
}

fn bench_join(c: &mut Criterion) {
    let mut group = c.benchmark_group("join");

    for fields in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*fields as u64));
        group.bench_with_input(
            BenchmarkId::new("comma_fields", fields),
            fields,
            |b, &fields| {
                let parts = ByteStr::new(csv_line(fields)).split(",").unwrap();
                let comma = ByteStr::new(",");

                b.iter(|| black_box(comma.join(&parts)));
            },
        );
    }
    group.finish();
}

fn bench_trim(c: &mut Criterion) {
    let mut group = c.benchmark_group("trim");

    for padding in [8, 64, 512].iter() {
        group.throughput(Throughput::Bytes(*padding as u64 * 2));
        group.bench_with_input(
            BenchmarkId::new("padded_line", padding),
            padding,
            |b, &padding| {
                let mut data = vec![b' '; padding];
                data.extend_from_slice(b"payload");
                data.extend(vec![b' '; padding]);
                let s = ByteStr::new(data);
                let patterns = [ByteStr::new("  "), ByteStr::new(" ")];

                b.iter(|| black_box(s.trim(&patterns)));
            },
        );
    }
    group.finish();
}

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");

    for pieces in [10, 100].iter() {
        group.throughput(Throughput::Elements(*pieces as u64));
        group.bench_with_input(
            BenchmarkId::new("repeated_append", pieces),
            pieces,
            |b, &pieces| {
                b.iter(|| {
                    let mut s = ByteStr::empty();
                    for _ in 0..pieces {
                        s.append("chunk_of_bytes");
                    }
                    black_box(s.len())
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_substring,
    bench_find,
    bench_split,
    bench_join,
    bench_trim,
    bench_append
);
criterion_main!(benches);
