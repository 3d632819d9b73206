// SPDX-License-Identifier: Apache-2.0

//! Benchmark for the repository-count exchange sort.
//!
//! Compares the linear best case (already ranked) against shuffled and
//! reversed input at the size of one `GET /users` page and a larger list.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use reporank_core::{UserRecord, sort_by_public_repos};

fn users(counts: impl Iterator<Item = u32>) -> Vec<UserRecord> {
    counts
        .enumerate()
        .map(|(i, repos)| UserRecord::new(format!("user{i}"), i as u64, repos))
        .collect()
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_by_public_repos");

    for size in [30_u32, 300] {
        let ranked = users((0..size).rev());
        let reversed = users(0..size);
        let mut rng = fastrand::Rng::with_seed(7);
        let shuffled = users((0..size).map(|_| rng.u32(0..500)));

        for (name, input) in [
            ("ranked", &ranked),
            ("shuffled", &shuffled),
            ("reversed", &reversed),
        ] {
            group.bench_with_input(BenchmarkId::new(name, size), input, |b, input| {
                b.iter(|| {
                    let mut records = input.clone();
                    black_box(sort_by_public_repos(&mut records))
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_sort);
criterion_main!(benches);
