use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use backprune::{PathCounter, PruningLevel};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn rss_kib() -> u64 {
    let mut sys = System::new();
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(p) = sys.process(get_current_pid().unwrap()) {
        p.memory() // KiB on supported platforms
    } else {
        0
    }
}

fn bench_pruning_levels(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamiltonian_count_5x5");
    for level in PruningLevel::ALL {
        group.bench_function(format!("level_{}_{level}", level.index()), |b| {
            b.iter_batched(
                || PathCounter::new(5, level).expect("bench size is positive"),
                |mut counter| {
                    let before = rss_kib();
                    let report = counter.run();
                    let after = rss_kib();
                    criterion::black_box(report.paths);
                    // record memory delta to stderr to avoid criterion noise
                    eprintln!(
                        "RSS KiB delta (level {level}): {}",
                        after.saturating_sub(before)
                    );
                },
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

fn bench_strong_levels_larger_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamiltonian_count_6x6");
    group.sample_size(10);
    for level in [PruningLevel::WallSplit, PruningLevel::BlockedSplit] {
        group.bench_function(format!("level_{}_{level}", level.index()), |b| {
            b.iter_batched(
                || PathCounter::new(6, level).expect("bench size is positive"),
                |mut counter| {
                    criterion::black_box(counter.run().calls);
                },
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pruning_levels, bench_strong_levels_larger_grid);
criterion_main!(benches);
