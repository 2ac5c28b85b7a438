use clap::Parser;
use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use distance_core::loader::{load_distance_table, load_words, DEFAULT_DELIMITER};
use distance_core::persistence::{is_snapshot_path, load_snapshot, save_snapshot};
use distance_core::{summarize, Error, Summary};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "summarize [OPTIONS] <WORDS> <DISTANCES> [y|n]";

const EXIT_FAILURE: u8 = 1;

/// Average distance between every pair of words in a list.
#[derive(Parser, Debug)]
#[command(name = "summarize", version, override_usage = USAGE)]
struct Args {
    /// Word list, one word per line
    words: PathBuf,

    /// Distance table: delimited text with a `word` column, or a `.bin` snapshot
    distances: PathBuf,

    /// `y` prints each pair and its distance before the mean
    display_pairs: Option<String>,

    /// Field delimiter of the distance table (a single character, or `tab`) [default: ,]
    #[arg(long, value_parser = parse_delimiter)]
    delimiter: Option<u8>,

    /// Print the whole summary as JSON
    #[arg(long)]
    json: bool,

    /// Also write the loaded table to this snapshot file
    #[arg(long, value_name = "PATH")]
    save_snapshot: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn shows_pairs(&self) -> bool {
        self.display_pairs.as_deref().is_some_and(|flag| flag.eq_ignore_ascii_case("y"))
    }
}

fn parse_delimiter(raw: &str) -> Result<u8, String> {
    match raw {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ if raw.len() == 1 && raw.is_ascii() => Ok(raw.as_bytes()[0]),
        _ => Err(format!("delimiter must be one ASCII character, got {:?}", raw)),
    }
}

fn main() -> ExitCode {
    // Missing or extra arguments exit with clap's usage status (2).
    let args = Args::parse();
    init_logging(args.verbose);

    let result = run(&args).map_err(|e| e.to_string()).and_then(|summary| {
        print_report(&args, &summary).map_err(|e| format!("cannot write output: {}", e))
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            report_error(&message);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<Summary, Error> {
    let words = load_words(&args.words)?;
    let table = if is_snapshot_path(&args.distances) {
        load_snapshot(&args.distances)?
    } else {
        load_distance_table(&args.distances, args.delimiter.unwrap_or(DEFAULT_DELIMITER))?
    };

    if let Some(path) = &args.save_snapshot {
        save_snapshot(&table, path)?;
    }

    Ok(summarize(&table, words.as_slice())?)
}

fn print_report(args: &Args, summary: &Summary) -> io::Result<()> {
    let stdout = io::stdout();
    let styled = stdout.is_tty();
    let mut out = stdout.lock();

    if args.json {
        serde_json::to_writer_pretty(&mut out, summary)?;
        writeln!(out)?;
        return out.flush();
    }

    if args.shows_pairs() {
        for pair in &summary.pairs {
            let label = format!("({}, {})", pair.first, pair.second);
            if styled {
                writeln!(out, "{}: {}", label.bold(), pair.distance)?;
            } else {
                writeln!(out, "{}: {}", label, pair.distance)?;
            }
        }
    }
    writeln!(out, "{}", summary.mean)?;
    out.flush()
}

fn report_error(message: &str) {
    let stderr = io::stderr();
    if stderr.is_tty() {
        eprintln!("{} {}", "error:".red().bold(), message);
    } else {
        eprintln!("error: {}", message);
    }
}
