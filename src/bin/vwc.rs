use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::Parser;

use vwc::classify::Vowel;
use vwc::common::{io_error_msg, reset_sigpipe};
use vwc::error::PipelineError;
use vwc::pipeline::{self, PipelineConfig};
use vwc::region::FileCounters;

#[derive(Parser)]
#[command(
    name = "vwc",
    about = "Count words and vowel-containing words in text files, concurrently"
)]
struct Cli {
    /// Maximum chunk size in bytes
    #[arg(short = 'c', long = "chunk-size", value_name = "BYTES", default_value_t = pipeline::DEFAULT_CHUNK_BYTES)]
    chunk_size: usize,

    /// Number of worker threads (default: logical CPUs)
    #[arg(short = 'w', long = "workers", value_name = "N")]
    workers: Option<usize>,

    /// Work-queue capacity in chunks
    #[arg(long = "queue-capacity", value_name = "N", default_value_t = pipeline::DEFAULT_QUEUE_CAPACITY)]
    queue_capacity: usize,

    /// Print elapsed wall-clock time to stderr
    #[arg(short = 't', long = "time")]
    time: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Files to process
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() {
    reset_sigpipe();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = PipelineConfig {
        chunk_bytes: cli.chunk_size,
        workers: cli.workers.unwrap_or_else(num_cpus::get),
        queue_capacity: cli.queue_capacity,
    };

    let start = Instant::now();
    let totals = match pipeline::run(&cli.files, &config) {
        Ok(totals) => totals,
        Err(err) => {
            match &err {
                PipelineError::Io { path, source } => {
                    eprintln!("vwc: {}: {}", path.display(), io_error_msg(source));
                }
                other => eprintln!("vwc: {}", other),
            }
            process::exit(1);
        }
    };

    let mut out = BufWriter::new(io::stdout().lock());
    for counters in &totals {
        print_counters(&mut out, counters);
    }
    let _ = out.flush();

    if cli.time {
        eprintln!("\nElapsed time = {:.6} s", start.elapsed().as_secs_f64());
    }
}

/// Per-file report: name, word total, then the six vowel-word counts in the
/// fixed A E I O U Y order.
fn print_counters(out: &mut impl Write, counters: &FileCounters) {
    let _ = writeln!(out, "\nFile name: {}", counters.file_name);
    let _ = writeln!(out, "Total number of words = {}", counters.total_words);
    let fields: Vec<String> = Vowel::LABELS
        .iter()
        .zip(&counters.vowel_words)
        .map(|(label, count)| format!("{}: {}", label, count))
        .collect();
    let _ = writeln!(out, "{}", fields.join("   "));
}
