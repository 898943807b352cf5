use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};
use take_ends::{GameSolver, Strategy, TakeEndsGame};

fn random_row(rng: &mut StdRng, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(-1_000..=1_000)).collect()
}

fn rss_kib() -> u64 {
    let mut sys = System::new();
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(p) = sys.process(get_current_pid().unwrap()) {
        p.memory()
    } else {
        0
    }
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("take_ends_solve");
    for &len in &[256usize, 1_024, 4_096] {
        for (label, strategy) in [
            ("bottom_up", Strategy::BottomUp),
            ("top_down", Strategy::TopDown),
        ] {
            group.bench_function(format!("{label}_n_{len}"), |b| {
                b.iter_batched(
                    || {
                        let mut rng = StdRng::seed_from_u64(42);
                        random_row(&mut rng, len)
                    },
                    |values| {
                        let before = rss_kib();
                        let solver =
                            GameSolver::with_strategy(TakeEndsGame::new(values), strategy);
                        let differential = solver.differential();
                        let after = rss_kib();
                        criterion::black_box(differential);
                        // record memory delta to stderr to avoid criterion noise
                        eprintln!(
                            "RSS KiB delta ({label} {len}): {}",
                            after.saturating_sub(before)
                        );
                    },
                    BatchSize::PerIteration,
                )
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
