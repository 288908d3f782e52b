//! CLI for running variant comparisons.
//!
//! Usage:
//!   variant-bench                      # Run every case
//!   variant-bench --list               # List available cases
//!   variant-bench branch_hints         # Run one case
//!   variant-bench --category loops     # Run every case in a category
//!   variant-bench --format csv -o out.csv

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use micro_variant_bench::error::Result;
use micro_variant_bench::input::{GeneratorConfig, InputGenerator};
use micro_variant_bench::registry::build_registry;
use micro_variant_bench::report::{self, CaseReport};
use micro_variant_bench::tui;
use micro_variant_bench::utils::{
    all_succeeded, run_cases, select_cases, CancelToken, CaseRun, PinStrategy, RoundOrder,
    RunEvent, TimingConfig, TimingEngine, ALL_CASES, C_COMPILER_NAME,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Table,
    Csv,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Order {
    Fixed,
    Rotated,
    Shuffled,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Pin {
    Off,
    Global,
    PerExecution,
}

#[derive(Parser, Debug)]
#[command(name = "variant-bench")]
#[command(about = "Side-by-side micro-benchmarks of equivalent code variants")]
#[command(version)]
struct Cli {
    /// Case to run, or "all"
    #[arg(default_value = ALL_CASES)]
    case: String,

    /// Timed rounds per case
    #[arg(short, long, env = "BENCH_REPS", default_value_t = 50)]
    reps: usize,

    /// Untimed warmup invocations per variant
    #[arg(short, long, env = "BENCH_WARMUP", default_value_t = 5)]
    warmup: usize,

    /// Seed for input generation and shuffled round order
    #[arg(short, long, env = "BENCH_SEED", default_value_t = 42)]
    seed: u64,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Reject generated inputs with fewer elements than this
    #[arg(long, default_value_t = 0)]
    min_elements: usize,

    /// Variant order inside a round
    #[arg(long, value_enum, default_value_t = Order::Rotated)]
    order: Order,

    /// CPU pinning strategy
    #[arg(long, value_enum, default_value_t = Pin::Global)]
    pin: Pin,

    /// Restore the input before every invocation, for every case
    #[arg(long)]
    fresh_input: bool,

    /// List available cases and exit
    #[arg(short, long)]
    list: bool,

    /// Only run (or list) cases in this category
    #[arg(long)]
    category: Option<String>,
}

impl Cli {
    fn timing_config(&self) -> TimingConfig {
        TimingConfig {
            repetitions: self.reps,
            warmup: self.warmup,
            pin_strategy: match self.pin {
                Pin::Off => PinStrategy::Off,
                Pin::Global => PinStrategy::Global,
                Pin::PerExecution => PinStrategy::PerExecution,
            },
            round_order: match self.order {
                Order::Fixed => RoundOrder::Fixed,
                Order::Rotated => RoundOrder::Rotated,
                Order::Shuffled => RoundOrder::Shuffled,
            },
            order_seed: self.seed,
            force_fresh_input: self.fresh_input,
            ..TimingConfig::default()
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Runs the selected cases. `Ok(false)` means at least one case failed.
fn run(cli: &Cli) -> Result<bool> {
    let registry = build_registry()?;

    if cli.list {
        tui::print_available_cases(&registry, cli.category.as_deref());
        return Ok(true);
    }

    let cases = select_cases(&registry, &cli.case, cli.category.as_deref()).inspect_err(|_| {
        eprintln!("Available: {}", registry.case_names().join(", "));
    })?;

    let engine = TimingEngine::new(&registry, cli.timing_config())?;
    let generator = InputGenerator::new(GeneratorConfig {
        min_elements: cli.min_elements,
        ..GeneratorConfig::default()
    })?;
    let show_tui = matches!(cli.format, Format::Table) && cli.output.is_none();

    if show_tui {
        tui::print_header();
    }

    let runs = run_cases(
        &engine,
        &generator,
        &cases,
        cli.seed,
        &CancelToken::new(),
        |event| {
            if !show_tui {
                return;
            }
            match event {
                RunEvent::Starting(case) => tui::print_case_info_box(case),
                RunEvent::Finished(CaseRun {
                    result: Ok(case_report),
                    ..
                }) => println!("{}", report::format_table(case_report)),
                RunEvent::Finished(_) => {}
            }
        },
    );
    let all_ok = all_succeeded(&runs);
    let reports: Vec<CaseReport> = runs.into_iter().filter_map(|run| run.result.ok()).collect();

    if show_tui {
        if let Some(compiler) = C_COMPILER_NAME {
            println!("Note: c-* variants compiled with {compiler}.");
        }
        println!("Note: Speedup is relative to the first (baseline) variant of each case.");
    } else {
        let rendered = match cli.format {
            Format::Table => reports
                .iter()
                .map(report::format_table)
                .collect::<Vec<_>>()
                .join("\n"),
            Format::Csv => report::to_csv(&reports)?,
            Format::Json => report::to_json(&reports)?,
        };
        match &cli.output {
            Some(path) => fs::write(path, rendered)?,
            None => print!("{rendered}"),
        }
    }

    Ok(all_ok)
}
