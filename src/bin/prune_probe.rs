use std::env;
use std::time::Instant;

use backprune::{PathCounterBuilder, PruningLevel, SearchReport};
use sysinfo::{get_current_pid, ProcessExt, ProcessRefreshKind, System, SystemExt};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("prune_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    // Print header explaining the probe
    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Pruning Probe: Search-Space Reduction Measurements");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("This probe counts corner-to-corner Hamiltonian paths on n x n grids at");
    eprintln!("every pruning level and verifies:");
    eprintln!("  • Correctness: every level reports the unpruned count (up to n = {})", options.verify_limit);
    eprintln!("  • Work saved: recursive visits drop as the level rises");
    eprintln!("  • Cost: wall-clock time and memory stay observable");
    eprintln!();
    eprintln!("Metrics explained:");
    eprintln!("  • paths: number of Hamiltonian paths found");
    eprintln!("  • calls: recursive visits performed during the search");
    eprintln!("  • wall_s: wall-clock seconds (lower is better)");
    eprintln!("  • rss_delta_kib: resident-memory delta in KiB");
    eprintln!("  • status: 'passed' = matches the level-0 baseline, 'not_checked' = grid");
    eprintln!("    too large to run the unpruned baseline");
    eprintln!();
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    for n in 1..=options.max_size {
        let verified = n <= options.verify_limit;
        let levels: &[PruningLevel] = if verified {
            &PruningLevel::ALL
        } else {
            &[PruningLevel::WallSplit, PruningLevel::BlockedSplit]
        };
        eprintln!(
            "[{n}/{max}] Grid {n}x{n} ({})...",
            if verified {
                "all levels, verified against level 0"
            } else {
                "strong levels only, baseline too slow"
            },
            max = options.max_size,
        );

        let mut baseline: Option<u64> = None;
        for &level in levels {
            let mut report = SearchReport::default();
            let m = measure(level, n, &mut sys, || {
                let mut counter = PathCounterBuilder::new(n)
                    .with_level(level)
                    .build()
                    .expect("probe sizes are positive");
                report = counter.run();

                match baseline {
                    None if level == PruningLevel::None => {
                        baseline = Some(report.paths);
                        (VerificationStatus::Passed, None)
                    }
                    Some(expected) if expected == report.paths => {
                        (VerificationStatus::Passed, None)
                    }
                    Some(expected) => (
                        VerificationStatus::Failed,
                        Some(format!("expected {expected}, got {}", report.paths)),
                    ),
                    None => (VerificationStatus::NotChecked, None),
                }
            });
            let status_icon = match m.verification_status {
                VerificationStatus::Passed => "✓",
                VerificationStatus::Failed => "✗",
                VerificationStatus::NotChecked => "○",
            };
            eprintln!(
                "      {} level {} ({}): paths={}, calls={}, time={:.3}s, status={}",
                status_icon,
                level.index(),
                level,
                report.paths,
                report.calls,
                m.wall_s,
                m.verification_status.label()
            );
            measurements.push(MeasurementWithTotals {
                measurement: m,
                paths: report.paths,
                calls: report.calls,
            });
        }
        eprintln!();
    }

    print_summary(&measurements, &options);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("prune_probe output error: {err}");
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    max_size: usize,
    verify_limit: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut max_size = 6usize;
        let mut verify_limit = 5usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--max-size=") {
                max_size = parse_positive(value, "max size")?;
            } else if arg == "--max-size" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --max-size".to_string())?
                    .into();
                max_size = parse_positive(&value, "max size")?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = parse_positive(value, "verify limit")?;
            } else if arg == "--verify-limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --verify-limit".to_string())?
                    .into();
                verify_limit = parse_positive(&value, "verify limit")?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            max_size,
            verify_limit,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin prune_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --max-size <N>                Largest grid side to probe (default: 6)
  --verify-limit <N>            Largest grid side to verify against the unpruned
                                baseline (default: 5); larger grids run only the
                                strong pruning levels
  -h, --help                    Print this help message

Examples:
  cargo run --bin prune_probe
  cargo run --bin prune_probe -- --format table --max-size 7
"
        );
    }
}

fn parse_positive(value: &str, what: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(format!("{what} must be a positive integer")),
    }
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[MeasurementWithTotals]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

#[derive(Clone)]
struct Measurement {
    level: PruningLevel,
    size: usize,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone)]
struct MeasurementWithTotals {
    measurement: Measurement,
    paths: u64,
    calls: u64,
}

#[derive(Clone, Copy)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }
}

fn measure<F>(level: PruningLevel, size: usize, sys: &mut System, compute: F) -> Measurement
where
    F: FnOnce() -> (VerificationStatus, Option<String>),
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let (status, detail) = compute();
    let duration = start.elapsed();
    let after = rss_kib(sys);

    Measurement {
        level,
        size,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        verification_status: status,
        verification_detail: detail,
    }
}

fn print_summary(measurements: &[MeasurementWithTotals], options: &Options) {
    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Probe Summary");
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut passed = 0;
    let mut failed = 0;
    let mut not_checked = 0;
    for m in measurements {
        match m.measurement.verification_status {
            VerificationStatus::Passed => passed += 1,
            VerificationStatus::Failed => failed += 1,
            VerificationStatus::NotChecked => not_checked += 1,
        }
    }

    let total = measurements.len();
    eprintln!("Verification Results:");
    eprintln!("  Total runs: {total}");
    eprintln!("  ✓ Passed: {passed}");
    eprintln!("  ✗ Failed: {failed}");
    eprintln!("  ○ Not checked (n > {}): {not_checked}", options.verify_limit);
    eprintln!();

    if failed > 0 {
        eprintln!("Failed Runs:");
        for m in measurements {
            if matches!(m.measurement.verification_status, VerificationStatus::Failed) {
                eprintln!(
                    "  ✗ level {} at n={}",
                    m.measurement.level, m.measurement.size
                );
                if let Some(ref detail) = m.measurement.verification_detail {
                    eprintln!("     Error: {detail}");
                }
            }
        }
        eprintln!();
    }

    eprintln!("Work saved per grid size:");
    for n in 1..=options.max_size {
        let runs: Vec<&MeasurementWithTotals> = measurements
            .iter()
            .filter(|m| m.measurement.size == n)
            .collect();
        let Some(widest) = runs.iter().map(|m| m.calls).max() else {
            continue;
        };
        let narrowest = runs.iter().map(|m| m.calls).min().unwrap_or(0);
        let saved = if widest == 0 {
            0.0
        } else {
            100.0 * (widest - narrowest) as f64 / widest as f64
        };
        eprintln!(
            "  n={n}: {widest} visits unpruned-most, {narrowest} pruned-most ({saved:.1}% saved)"
        );
    }
    eprintln!();

    eprintln!("{}", "=".repeat(80));
    if failed == 0 {
        eprintln!("✓ Every verified level reproduced the unpruned count.");
    } else {
        eprintln!("✗ {failed} run(s) diverged from the baseline. Review the errors above.");
    }
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn write_csv(measurements: &[MeasurementWithTotals]) -> Result<(), String> {
    println!("level,size,paths,calls,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .measurement
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{},{},{:.3},{},{},\"{}\"",
            m.measurement.level,
            m.measurement.size,
            m.paths,
            m.calls,
            m.measurement.wall_s,
            m.measurement.rss_delta_kib,
            m.measurement.verification_status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[MeasurementWithTotals]) -> Result<(), String> {
    let mut col1 = "level".len();
    for m in measurements {
        col1 = col1.max(m.measurement.level.to_string().len());
    }

    println!(
        "{:<col1$}  {:>4}  {:>12}  {:>12}  {:>10}  {:>14}  {}",
        "level",
        "size",
        "paths",
        "calls",
        "wall_s",
        "rss_delta_kib",
        "status",
        col1 = col1
    );
    println!(
        "{:-<col1$}  {:-<4}  {:-<12}  {:-<12}  {:-<10}  {:-<14}  {:-<12}",
        "", "", "", "", "", "", "",
        col1 = col1
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:>4}  {:>12}  {:>12}  {:>10.3}  {:>14}  {}",
            m.measurement.level.to_string(),
            m.measurement.size,
            m.paths,
            m.calls,
            m.measurement.wall_s,
            m.measurement.rss_delta_kib,
            m.measurement.verification_status.label(),
            col1 = col1
        );
    }
    Ok(())
}

fn write_json(measurements: &[MeasurementWithTotals]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = m
            .measurement
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"));
        println!(
            "  {{\"level\":\"{}\",\"size\":{},\"paths\":{},\"calls\":{},\"wall_s\":{:.3},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.measurement.level,
            m.measurement.size,
            m.paths,
            m.calls,
            m.measurement.wall_s,
            m.measurement.rss_delta_kib,
            m.measurement.verification_status.label(),
            match detail {
                Some(ref d) => format!("\"{d}\""),
                None => "null".to_string(),
            },
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory()
    } else {
        0
    }
}
