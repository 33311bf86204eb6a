use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lookup_filters::exact::{HashIndex, LinearScan, SortedArray};
use lookup_filters::{BloomFilter, CuckooFilter};

const SIZES: [usize; 4] = [100, 1_000, 10_000, 100_000];

fn make_keys(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("key_{i:08}")).collect()
}

fn bench_lookup(c: &mut Criterion) {
    let all_keys = make_keys(*SIZES.last().unwrap());
    let mut group = c.benchmark_group("lookup");

    for size in SIZES {
        let keys = &all_keys[..size];
        let target = keys[size / 2].as_str();

        if size <= 10_000 {
            let linear = LinearScan::new(keys);
            group.bench_with_input(BenchmarkId::new("linear", size), target, |b, t| {
                b.iter(|| linear.search(black_box(t)))
            });
        }

        let sorted = SortedArray::new(keys);
        group.bench_with_input(BenchmarkId::new("binary", size), target, |b, t| {
            b.iter(|| sorted.search(black_box(t)))
        });

        let hashed = HashIndex::new(keys);
        group.bench_with_input(BenchmarkId::new("hash", size), target, |b, t| {
            b.iter(|| hashed.search(black_box(t)))
        });

        let bloom = BloomFilter::new(keys);
        group.bench_with_input(BenchmarkId::new("bloom", size), target, |b, t| {
            b.iter(|| bloom.contains(black_box(t)))
        });

        let mut cuckoo = CuckooFilter::new(size).unwrap();
        for key in keys {
            cuckoo.insert(key).unwrap();
        }
        group.bench_with_input(BenchmarkId::new("cuckoo", size), target, |b, t| {
            b.iter(|| cuckoo.contains(black_box(t)))
        });
    }

    group.finish();
}

fn bench_cuckoo_insert(c: &mut Criterion) {
    let keys = make_keys(10_000);

    c.bench_function("cuckoo_insert_10000", |b| {
        b.iter(|| {
            let mut cuckoo = CuckooFilter::new(keys.len()).unwrap();
            for key in &keys {
                let _ = cuckoo.insert(black_box(key));
            }
            cuckoo
        })
    });
}

criterion_group!(benches, bench_lookup, bench_cuckoo_insert);
criterion_main!(benches);
