use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{LevelFilter, Log, Metadata, Record};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use sufalign::harness::{self, Reporter};
use sufalign::{fasta, Algorithm, SuffixArrayIndex};
use termcolor::{ColorChoice, StandardStream};

#[derive(Parser)]
#[command(name = "sufalign")]
#[command(about = "Exact-match read alignment over a suffix array")]
struct Cli {
    /// Log more (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Align a read against a reference and print its loci
    Align {
        /// FASTA file holding the read
        #[arg(short, long, default_value = "P.fa")]
        pattern: PathBuf,

        /// FASTA file holding the reference
        #[arg(short, long, default_value = "T.fa")]
        text: PathBuf,

        /// Suffix sorting algorithm
        #[arg(short, long, value_enum, default_value_t = AlgorithmArg::Auto)]
        algorithm: AlgorithmArg,
    },
    /// Run every case directory under DIR and compare with output.txt
    Check {
        #[arg(default_value = "./tests")]
        dir: PathBuf,

        /// When to color PASS/FAIL lines
        #[arg(long, value_enum, default_value_t = ColorArg::Auto)]
        color: ColorArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    Auto,
    Naive,
    Doubling,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Auto => Algorithm::Auto,
            AlgorithmArg::Naive => Algorithm::Naive,
            AlgorithmArg::Doubling => Algorithm::Doubling,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorChoice::Auto,
            ColorArg::Always => ColorChoice::Always,
            ColorArg::Never => ColorChoice::Never,
        }
    }
}

/// Writes `level: message` lines to stderr.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(
                std::io::stderr(),
                "{}: {}",
                record.level().as_str().to_lowercase(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    // only fails if a logger is already installed
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn align(pattern: PathBuf, text: PathBuf, algorithm: Algorithm) -> Result<ExitCode> {
    let pattern = fasta::read_sequence(&pattern)
        .with_context(|| format!("reading read {}", pattern.display()))?;
    let text = fasta::read_sequence(&text)
        .with_context(|| format!("reading reference {}", text.display()))?;

    let index: SuffixArrayIndex = SuffixArrayIndex::with_algorithm(text, algorithm);
    let loci = index.search(&pattern);

    println!("{}", harness::format_loci(&loci));

    Ok(ExitCode::SUCCESS)
}

fn check(dir: PathBuf, color: ColorChoice) -> Result<ExitCode> {
    let suite = harness::run_suite(&dir)
        .with_context(|| format!("running cases under {}", dir.display()))?;

    let mut reporter = Reporter::new(StandardStream::stdout(color));
    reporter.suite(&suite)?;

    Ok(if suite.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Align {
            pattern,
            text,
            algorithm,
        } => align(pattern, text, algorithm.into()),
        Commands::Check { dir, color } => check(dir, color.into()),
    }
}
