//! HNSW vs brute-force benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simindex::{FlatIndex, HnswGraph, HnswParams, Vector, VectorIndex};

fn create_random_vectors(n: usize, dim: usize) -> Vec<Vector> {
    let mut rng = StdRng::seed_from_u64(0);
    (0..n)
        .map(|_| {
            let data: Vec<f32> = (0..dim).map(|_| rng.gen_range(-1.0f32..1.0)).collect();
            Vector::new(data)
        })
        .collect()
}

fn benchmark_hnsw_vs_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("hnsw_vs_flat");
    group.sample_size(20);

    for &size in &[1_000, 10_000] {
        let dim = 128;
        let vectors = create_random_vectors(size, dim);
        let query = Vector::new(vec![0.5; dim]);

        let mut flat = FlatIndex::new();
        let mut hnsw = HnswGraph::new(HnswParams::new(16, 200, 50).with_seed(1)).unwrap();
        for (i, v) in vectors.iter().enumerate() {
            flat.add(v.clone(), i).unwrap();
            hnsw.insert(v.clone(), i).unwrap();
        }

        group.bench_with_input(BenchmarkId::new("flat", size), &size, |b, _| {
            b.iter(|| flat.search(black_box(&query), black_box(10)).unwrap().len());
        });

        group.bench_with_input(BenchmarkId::new("hnsw", size), &size, |b, _| {
            b.iter(|| hnsw.search(black_box(&query), black_box(10)).unwrap().len());
        });
    }

    group.finish();
}

fn benchmark_hnsw_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("hnsw_insert");
    group.sample_size(10);

    let vectors = create_random_vectors(1_000, 128);

    group.bench_function("insert_1000_128d", |b| {
        b.iter(|| {
            let mut hnsw = HnswGraph::new(HnswParams::new(16, 200, 50).with_seed(1)).unwrap();
            for (i, v) in vectors.iter().enumerate() {
                hnsw.insert(v.clone(), i).unwrap();
            }
            hnsw.len()
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_hnsw_vs_flat, benchmark_hnsw_insert);
criterion_main!(benches);
