use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use persona_forge::{expand_wordlist, HashType, Session};

// Modify time limit here
const BENCHMARK_TIME_LIMIT: std::time::Duration = std::time::Duration::from_secs(10);

const PROFILE_COUNTS: [usize; 3] = [10, 100, 1000];

/// Benchmarks batch generation in both hash modes and wordlist expansion of
/// the resulting corpus.
fn generation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");
    group.measurement_time(BENCHMARK_TIME_LIMIT);

    for count in PROFILE_COUNTS {
        for hash_type in [HashType::Standard, HashType::Salted] {
            group.bench_with_input(
                BenchmarkId::new(format!("generate:{}", hash_type), count),
                &count,
                |b, &count| {
                    b.iter(|| {
                        let mut session = Session::with_seed(42);
                        session
                            .generate(black_box(count), 5, hash_type)
                            .expect("generate returned an error")
                            .0
                            .len()
                    });
                },
            );
        }

        let mut session = Session::with_seed(42);
        session
            .generate(count, 5, HashType::Standard)
            .expect("generate returned an error");
        group.bench_with_input(
            BenchmarkId::new("expand_wordlist", count),
            session.profiles(),
            |b, profiles| {
                b.iter(|| {
                    expand_wordlist(black_box(profiles))
                        .expect("expand_wordlist returned an error")
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, generation_benchmark);
criterion_main!(benches);
